use std::io::{Read, Seek};

use serde::Serialize;

use crate::binary::BinaryCursor;
use crate::error::Result;

/// Number of waypoint slots stored in every path, used or not.
pub const PATH_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vec3 { x, y, z }
    }
}

impl Vec3 {
    pub(crate) fn read<R: Read + Seek>(cursor: &mut BinaryCursor<R>) -> Result<Self> {
        Ok(cursor.read_vec3()?.into())
    }
}

/// Waypoint list with a fixed on-disk capacity.
///
/// Slots past `waypoint_count` hold whatever bytes the file had there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScnPath {
    pub waypoint_count: i32,
    pub slots: [Vec3; PATH_CAPACITY],
}

impl ScnPath {
    pub(crate) fn read<R: Read + Seek>(cursor: &mut BinaryCursor<R>) -> Result<Self> {
        let waypoint_count = cursor.read_i32()?;
        let slots = cursor
            .read_vec3_array::<PATH_CAPACITY>()?
            .map(Vec3::from);
        Ok(ScnPath {
            waypoint_count,
            slots,
        })
    }

    /// Waypoints that are actually part of the path.
    pub fn waypoints(&self) -> &[Vec3] {
        let used = self.waypoint_count.clamp(0, PATH_CAPACITY as i32) as usize;
        &self.slots[..used]
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints().is_empty()
    }
}

/// Tile-map trigger area in tile coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriggerRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TriggerRect {
    pub(crate) fn read<R: Read + Seek>(cursor: &mut BinaryCursor<R>) -> Result<Self> {
        Ok(TriggerRect {
            left: cursor.read_i32()?,
            top: cursor.read_i32()?,
            right: cursor.read_i32()?,
            bottom: cursor.read_i32()?,
        })
    }

    /// Edges are inclusive.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub(crate) fn read<R: Read + Seek>(cursor: &mut BinaryCursor<R>) -> Result<Self> {
        Ok(BoundingBox {
            min: Vec3::read(cursor)?,
            max: Vec3::read(cursor)?,
        })
    }
}
