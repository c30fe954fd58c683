//! Decoder for SCN scene files.
//!
//! A scene file is a small fixed header, the scene metadata block, and two
//! record sections (NPCs, then objects) located through absolute offsets
//! stored in the header. All integers are little-endian.

mod assets;
mod geometry;
mod npc;
mod object;
mod reserved;

use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use log::{debug, warn};
use memmap2::Mmap;
use serde::Serialize;
use thiserror::Error;

use crate::binary::BinaryCursor;
use crate::error::{Result, ScnError};
use crate::text::{CODEPAGE_GBK, TextCodec};

pub use assets::{ARCHIVE_EXTENSION, ARCHIVE_SEPARATOR, BASE_DATA_ARCHIVE, ModelAsset, ModelKind};
pub use geometry::{BoundingBox, PATH_CAPACITY, ScnPath, TriggerRect, Vec3};
pub use npc::{ActorBehaviour, ActorKind, NPC_RECORD_SIZE, NpcRecord};
pub use object::{
    ObjectParameters, ObjectRecord, ObjectRequirements, ObjectType, UNLIMITED_USES,
};
pub use reserved::{ReservedBytes, ReservedWords};

/// Leading tag of every scene file; the fourth magic byte is ignored.
pub const SCN_TAG: &[u8; 3] = b"SCN";
/// Magic plus version, counts and section offsets.
pub const HEADER_SIZE: u64 = 18;
/// Three names, three integers and six reserved words.
pub const SCENE_INFO_SIZE: u64 = 132;

const SCENE_INFO_RESERVED_WORDS: usize = 6;

/// Game edition whose object record layout the file uses.
///
/// The files do not say which one they are; callers pick it per data set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameVariant {
    #[default]
    Pal3,
    Pal3A,
}

impl GameVariant {
    pub const fn object_record_size(self) -> u64 {
        match self {
            GameVariant::Pal3 => 620,
            GameVariant::Pal3A => 604,
        }
    }

    pub(crate) const fn object_reserved_words(self) -> usize {
        match self {
            GameVariant::Pal3 => 52,
            GameVariant::Pal3A => 45,
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameVariant::Pal3 => f.write_str("pal3"),
            GameVariant::Pal3A => f.write_str("pal3a"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown game variant '{0}', expected pal3 or pal3a")]
pub struct ParseVariantError(String);

impl FromStr for GameVariant {
    type Err = ParseVariantError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "pal3" => Ok(GameVariant::Pal3),
            "pal3a" => Ok(GameVariant::Pal3A),
            _ => Err(ParseVariantError(value.to_string())),
        }
    }
}

/// Scene category value from the metadata block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SceneType(pub i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScnHeader {
    pub version: i16,
    pub npc_count: i16,
    pub npc_offset: u32,
    pub object_count: i16,
    pub object_offset: u32,
}

impl ScnHeader {
    fn read<R: Read + Seek>(cursor: &mut BinaryCursor<R>) -> Result<Self> {
        let tag = cursor.read_byte_array::<3>()?;
        if &tag != SCN_TAG {
            return Err(ScnError::invalid_format(format!(
                "header != SCN (found {:?})",
                String::from_utf8_lossy(&tag)
            )));
        }
        cursor.read_u8()?;

        Ok(ScnHeader {
            version: cursor.read_i16()?,
            npc_count: cursor.read_i16()?,
            npc_offset: cursor.read_u32()?,
            object_count: cursor.read_i16()?,
            object_offset: cursor.read_u32()?,
        })
    }

    fn record_count(count: i16, section: &str) -> Result<usize> {
        usize::try_from(count).map_err(|_| {
            ScnError::invalid_format(format!("negative {section} count {count}"))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneInfo {
    pub city_name: String,
    pub name: String,
    pub model: String,
    pub scene_type: SceneType,
    pub light_map: i32,
    pub sky_box: u32,
    pub reserved: ReservedWords,
}

impl SceneInfo {
    fn read<R: Read + Seek>(cursor: &mut BinaryCursor<R>, codec: &TextCodec) -> Result<Self> {
        Ok(SceneInfo {
            city_name: cursor.read_fixed_string(32, codec)?,
            name: cursor.read_fixed_string(32, codec)?,
            model: cursor.read_fixed_string(32, codec)?,
            scene_type: SceneType(cursor.read_i32()?),
            light_map: cursor.read_i32()?,
            sky_box: cursor.read_u32()?,
            reserved: ReservedWords::new(cursor.read_u32_vec(SCENE_INFO_RESERVED_WORDS)?),
        })
    }
}

/// Fully decoded scene file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDescriptor {
    pub header: ScnHeader,
    pub info: SceneInfo,
    pub npcs: Vec<NpcRecord>,
    pub objects: Vec<ObjectRecord>,
}

impl SceneDescriptor {
    pub fn npc(&self, id: u8) -> Option<&NpcRecord> {
        self.npcs.iter().find(|npc| npc.id == id)
    }

    pub fn object(&self, id: u8) -> Option<&ObjectRecord> {
        self.objects.iter().find(|object| object.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSection {
    Npc,
}

/// Non-fatal oddity noticed while decoding a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub section: DiagnosticSection,
    pub index: usize,
    pub record_id: u8,
    pub record_name: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} record #{} (id {}, name {:?}): {}",
            self.section, self.index, self.record_id, self.record_name, self.message
        )
    }
}

/// Decoded scene together with the anomalies seen while reading it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedScene {
    pub scene: SceneDescriptor,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    pub variant: GameVariant,
    pub codepage: u16,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            variant: GameVariant::Pal3,
            codepage: CODEPAGE_GBK,
        }
    }
}

/// Reusable, stateless SCN decoder bound to one variant and codepage.
#[derive(Debug, Clone, Copy)]
pub struct SceneFileDecoder {
    variant: GameVariant,
    codec: TextCodec,
}

impl SceneFileDecoder {
    pub fn new(config: DecoderConfig) -> Result<Self> {
        Ok(SceneFileDecoder {
            variant: config.variant,
            codec: TextCodec::for_codepage(config.codepage)?,
        })
    }

    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    pub fn codec(&self) -> &TextCodec {
        &self.codec
    }

    /// Memory-map and decode a scene file from disk.
    pub fn open(&self, path: impl AsRef<Path>) -> anyhow::Result<DecodedScene> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("opening SCN file {}", path.display()))?;
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("memory-mapping SCN file {}", path.display()))?;
        self.decode_bytes(&mmap)
            .with_context(|| format!("decoding SCN file {}", path.display()))
    }

    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<DecodedScene> {
        self.decode(Cursor::new(bytes))
    }

    /// Decode a whole scene from a seekable stream. Offsets are taken from
    /// the start of the stream regardless of its current position.
    pub fn decode<R: Read + Seek>(&self, reader: R) -> Result<DecodedScene> {
        let mut cursor = BinaryCursor::new(reader)?;

        let header = ScnHeader::read(&mut cursor)?;
        let npc_count = ScnHeader::record_count(header.npc_count, "NPC")?;
        let object_count = ScnHeader::record_count(header.object_count, "object")?;
        debug!(
            "SCN v{} with {} NPCs @ {:#x}, {} objects @ {:#x} ({} layout)",
            header.version,
            npc_count,
            header.npc_offset,
            object_count,
            header.object_offset,
            self.variant
        );

        let info = SceneInfo::read(&mut cursor, &self.codec)?;

        cursor.seek_to(u64::from(header.npc_offset))?;
        let mut diagnostics = Vec::new();
        let mut npcs = Vec::with_capacity(npc_count);
        for index in 0..npc_count {
            let npc = NpcRecord::read(&mut cursor, &self.codec)?;
            if npc.has_unknown_bytes_set() {
                let diagnostic = Diagnostic {
                    section: DiagnosticSection::Npc,
                    index,
                    record_id: npc.id,
                    record_name: npc.name.clone(),
                    message: format!(
                        "unknown bytes have values {:02x?} {:02x?}",
                        npc.unknown1.as_slice(),
                        npc.unknown2.as_slice()
                    ),
                };
                warn!("{diagnostic}");
                diagnostics.push(diagnostic);
            }
            npcs.push(npc);
        }

        cursor.seek_to(u64::from(header.object_offset))?;
        let mut objects = Vec::with_capacity(object_count);
        for _ in 0..object_count {
            objects.push(ObjectRecord::read(&mut cursor, &self.codec, self.variant)?);
        }

        debug!(
            "decoded scene {}/{} ({} diagnostics)",
            info.city_name,
            info.name,
            diagnostics.len()
        );

        Ok(DecodedScene {
            scene: SceneDescriptor {
                header,
                info,
                npcs,
                objects,
            },
            diagnostics,
        })
    }
}
