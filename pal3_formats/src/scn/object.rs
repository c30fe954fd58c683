use std::io::{Read, Seek};

use serde::Serialize;

use super::GameVariant;
use super::geometry::{BoundingBox, ScnPath, TriggerRect, Vec3};
use super::reserved::{ReservedBytes, ReservedWords};
use crate::binary::BinaryCursor;
use crate::error::Result;
use crate::text::TextCodec;

/// `times` value meaning the object can be used any number of times.
pub const UNLIMITED_USES: u8 = 0xFF;

/// Object category byte; the meaning of the six parameters depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ObjectType(pub u8);

/// Type-specific parameters. PAL3 stores them as integers, PAL3A as floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "encoding", content = "values", rename_all = "snake_case")]
pub enum ObjectParameters {
    Integers([i32; 6]),
    Floats([f32; 6]),
}

impl ObjectParameters {
    /// Parameter as an integer; floats truncate toward zero.
    pub fn as_int(&self, index: usize) -> Option<i32> {
        match self {
            ObjectParameters::Integers(values) => values.get(index).copied(),
            ObjectParameters::Floats(values) => values.get(index).map(|&value| value as i32),
        }
    }

    pub fn as_float(&self, index: usize) -> Option<f32> {
        match self {
            ObjectParameters::Integers(values) => values.get(index).map(|&value| value as f32),
            ObjectParameters::Floats(values) => values.get(index).copied(),
        }
    }
}

/// Thresholds the player must meet before the object reacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ObjectRequirements {
    pub special_action: u16,
    pub item: u16,
    pub gold: u16,
    pub level: u16,
    pub skill: u16,
    pub all_open: u16,
}

impl ObjectRequirements {
    fn read<R: Read + Seek>(cursor: &mut BinaryCursor<R>) -> Result<Self> {
        Ok(ObjectRequirements {
            special_action: cursor.read_u16()?,
            item: cursor.read_u16()?,
            gold: cursor.read_u16()?,
            level: cursor.read_u16()?,
            skill: cursor.read_u16()?,
            all_open: cursor.read_u16()?,
        })
    }

    pub fn is_unconditional(&self) -> bool {
        *self == ObjectRequirements::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectRecord {
    pub variant: GameVariant,
    pub id: u8,
    pub active: u8,
    pub times: u8,
    pub switch_state: u8,
    pub name: String,
    pub trigger_type: u16,
    pub non_blocking: u16,
    pub position: Vec3,
    pub y_rotation: f32,
    pub trigger_rect: TriggerRect,
    pub object_type: ObjectType,
    pub save_state: u8,
    pub layer: u8,
    pub element: u8,
    pub parameters: ObjectParameters,
    /// PAL3A only: four bytes after the parameters.
    pub unknown1: Option<ReservedBytes>,
    pub requirements: ObjectRequirements,
    pub failed_message: String,
    /// PAL3A only: four bytes before the script id.
    pub unknown2: Option<ReservedBytes>,
    pub script_id: u32,
    pub path: ScnPath,
    pub linked_object: u16,
    pub dependent_scene_name: String,
    pub dependent_id: u16,
    pub bounding_box: BoundingBox,
    pub x_rotation: f32,
    /// PAL3A only.
    pub z_rotation: Option<f32>,
    pub sfx_name: String,
    pub effect_model_type: u32,
    pub script_change_active: u32,
    pub script_moved: u32,
    pub reserved: ReservedWords,
}

impl ObjectRecord {
    pub(crate) fn read<R: Read + Seek>(
        cursor: &mut BinaryCursor<R>,
        codec: &TextCodec,
        variant: GameVariant,
    ) -> Result<Self> {
        let id = cursor.read_u8()?;
        let active = cursor.read_u8()?;
        let times = cursor.read_u8()?;
        let switch_state = cursor.read_u8()?;

        let name = cursor.read_fixed_string(32, codec)?;
        let trigger_type = cursor.read_u16()?;
        let non_blocking = cursor.read_u16()?;

        let position = Vec3::read(cursor)?;
        let y_rotation = cursor.read_f32()?;
        let trigger_rect = TriggerRect::read(cursor)?;

        let object_type = ObjectType(cursor.read_u8()?);
        let save_state = cursor.read_u8()?;
        let layer = cursor.read_u8()?;
        let element = cursor.read_u8()?;

        let (parameters, unknown1) = match variant {
            GameVariant::Pal3 => (ObjectParameters::Integers(cursor.read_i32_array()?), None),
            GameVariant::Pal3A => {
                let parameters = ObjectParameters::Floats(cursor.read_f32_array()?);
                let unknown = ReservedBytes::new(cursor.read_bytes(4)?);
                (parameters, Some(unknown))
            }
        };

        let requirements = ObjectRequirements::read(cursor)?;
        let failed_message = cursor.read_fixed_string(16, codec)?;

        let unknown2 = match variant {
            GameVariant::Pal3 => None,
            GameVariant::Pal3A => Some(ReservedBytes::new(cursor.read_bytes(4)?)),
        };
        let script_id = cursor.read_u32()?;
        let path = ScnPath::read(cursor)?;

        let linked_object = cursor.read_u16()?;
        let dependent_scene_name = cursor.read_fixed_string(32, codec)?;
        let dependent_id = cursor.read_u16()?;

        let bounding_box = BoundingBox::read(cursor)?;

        let x_rotation = cursor.read_f32()?;
        let z_rotation = match variant {
            GameVariant::Pal3 => None,
            GameVariant::Pal3A => Some(cursor.read_f32()?),
        };
        let sfx_name = cursor.read_fixed_string(8, codec)?;
        let effect_model_type = cursor.read_u32()?;

        let script_change_active = cursor.read_u32()?;
        let script_moved = cursor.read_u32()?;

        let reserved = ReservedWords::new(cursor.read_u32_vec(variant.object_reserved_words())?);

        Ok(ObjectRecord {
            variant,
            id,
            active,
            times,
            switch_state,
            name,
            trigger_type,
            non_blocking,
            position,
            y_rotation,
            trigger_rect,
            object_type,
            save_state,
            layer,
            element,
            parameters,
            unknown1,
            requirements,
            failed_message,
            unknown2,
            script_id,
            path,
            linked_object,
            dependent_scene_name,
            dependent_id,
            bounding_box,
            x_rotation,
            z_rotation,
            sfx_name,
            effect_model_type,
            script_change_active,
            script_moved,
            reserved,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active != 0
    }

    pub fn has_unlimited_uses(&self) -> bool {
        self.times == UNLIMITED_USES
    }

    /// Euler rotation `[x, y, z]` in degrees; PAL3 records have no Z component.
    pub fn rotation_degrees(&self) -> [f32; 3] {
        [
            self.x_rotation,
            self.y_rotation,
            self.z_rotation.unwrap_or(0.0),
        ]
    }

    /// Argument handed to the object's graphics effect.
    pub fn effect_parameter(&self) -> u32 {
        match self.variant {
            GameVariant::Pal3 => self.effect_model_type,
            GameVariant::Pal3A => self.parameters.as_float(5).unwrap_or(0.0) as u32,
        }
    }

    /// Whether this object teleports into another scene.
    pub fn links_to_scene(&self) -> bool {
        !self.dependent_scene_name.is_empty()
    }
}
