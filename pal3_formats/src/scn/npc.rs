use std::io::{Read, Seek};

use serde::Serialize;

use super::geometry::ScnPath;
use super::reserved::{ReservedBytes, ReservedWords};
use crate::binary::BinaryCursor;
use crate::error::Result;
use crate::text::TextCodec;

/// Size of one NPC record on disk.
pub const NPC_RECORD_SIZE: u64 = 456;

const NPC_RESERVED_WORDS: usize = 29;

/// Actor category as stored in the record's kind byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ActorKind(pub u8);

/// Behaviour an actor starts the scene with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ActorBehaviour(pub i32);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NpcRecord {
    pub id: u8,
    pub kind: ActorKind,
    pub name: String,
    pub texture: String,
    pub unknown1: ReservedBytes,
    pub facing_direction: f32,
    pub layer: u8,
    pub unknown2: ReservedBytes,
    pub position_x: f32,
    pub position_z: f32,
    pub init_active: i32,
    pub init_behaviour: ActorBehaviour,
    pub script_id: u32,
    pub position_y: f32,
    pub init_action: String,
    pub monster_ids: [u32; 3],
    pub monster_count: u16,
    pub monster_repeat: u16,
    pub path: ScnPath,
    pub no_turn: u32,
    pub loop_action: u32,
    pub speed: u32,
    pub reserved: ReservedWords,
}

impl NpcRecord {
    pub(crate) fn read<R: Read + Seek>(
        cursor: &mut BinaryCursor<R>,
        codec: &TextCodec,
    ) -> Result<Self> {
        // Position components are split around the behaviour fields on disk.
        Ok(NpcRecord {
            id: cursor.read_u8()?,
            kind: ActorKind(cursor.read_u8()?),
            name: cursor.read_fixed_string(32, codec)?,
            texture: cursor.read_fixed_string(32, codec)?,
            unknown1: ReservedBytes::new(cursor.read_bytes(2)?),
            facing_direction: cursor.read_f32()?,
            layer: cursor.read_u8()?,
            unknown2: ReservedBytes::new(cursor.read_bytes(3)?),
            position_x: cursor.read_f32()?,
            position_z: cursor.read_f32()?,
            init_active: cursor.read_i32()?,
            init_behaviour: ActorBehaviour(cursor.read_i32()?),
            script_id: cursor.read_u32()?,
            position_y: cursor.read_f32()?,
            init_action: cursor.read_fixed_string(16, codec)?,
            monster_ids: [cursor.read_u32()?, cursor.read_u32()?, cursor.read_u32()?],
            monster_count: cursor.read_u16()?,
            monster_repeat: cursor.read_u16()?,
            path: ScnPath::read(cursor)?,
            no_turn: cursor.read_u32()?,
            loop_action: cursor.read_u32()?,
            speed: cursor.read_u32()?,
            reserved: ReservedWords::new(cursor.read_u32_vec(NPC_RESERVED_WORDS)?),
        })
    }

    /// World position assembled from the three stored components.
    pub fn position(&self) -> [f32; 3] {
        [self.position_x, self.position_y, self.position_z]
    }

    pub fn is_initially_active(&self) -> bool {
        self.init_active != 0
    }

    /// Both unknown byte groups are expected to be zero in shipped data.
    pub fn has_unknown_bytes_set(&self) -> bool {
        !self.unknown1.is_zeroed() || !self.unknown2.is_zeroed()
    }

    /// Monster references that are actually set.
    pub fn monsters(&self) -> impl Iterator<Item = u32> + '_ {
        self.monster_ids.iter().copied().filter(|&id| id != 0)
    }
}
