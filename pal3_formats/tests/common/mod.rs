#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};
use pal3_formats::GameVariant;
use pal3_formats::scn::{HEADER_SIZE, NPC_RECORD_SIZE, SCENE_INFO_SIZE};

pub fn fixed(text: &[u8], len: usize) -> Vec<u8> {
    assert!(text.len() <= len, "fixture string longer than field");
    let mut out = text.to_vec();
    out.resize(len, 0);
    out
}

fn put_f32(out: &mut Vec<u8>, value: f32) {
    out.write_f32::<LittleEndian>(value).unwrap();
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.write_u32::<LittleEndian>(value).unwrap();
}

fn put_i32(out: &mut Vec<u8>, value: i32) {
    out.write_i32::<LittleEndian>(value).unwrap();
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.write_u16::<LittleEndian>(value).unwrap();
}

fn put_vec3(out: &mut Vec<u8>, value: [f32; 3]) {
    for component in value {
        put_f32(out, component);
    }
}

/// Path with `count` waypoints; slot `i` holds `[i, i + 0.5, -i]` plus `bias`.
pub fn path(out: &mut Vec<u8>, count: i32, bias: f32) {
    put_i32(out, count);
    for slot in 0..16 {
        let i = slot as f32 + bias;
        put_vec3(out, [i, i + 0.5, -i]);
    }
}

pub fn scene_info(city: &[u8], name: &[u8], model: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend(fixed(city, 32));
    out.extend(fixed(name, 32));
    out.extend(fixed(model, 32));
    put_i32(&mut out, 2);
    put_i32(&mut out, 1);
    put_u32(&mut out, 3);
    for word in 0..6u32 {
        put_u32(&mut out, 0x5100_0000 + word);
    }
    assert_eq!(out.len() as u64, SCENE_INFO_SIZE);
    out
}

pub struct NpcFixture {
    pub id: u8,
    pub name: Vec<u8>,
    pub unknown1: [u8; 2],
    pub unknown2: [u8; 3],
    pub waypoints: i32,
}

impl NpcFixture {
    pub fn new(id: u8, name: &str) -> Self {
        NpcFixture {
            id,
            name: name.as_bytes().to_vec(),
            unknown1: [0; 2],
            unknown2: [0; 3],
            waypoints: 3,
        }
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.push(self.id);
        out.push(4);
        out.extend(fixed(&self.name, 32));
        out.extend(fixed(b"101", 32));
        out.extend(self.unknown1);
        put_f32(&mut out, 1.25);
        out.push(1);
        out.extend(self.unknown2);
        put_f32(&mut out, 10.0);
        put_f32(&mut out, 30.0);
        put_i32(&mut out, 1);
        put_i32(&mut out, 3);
        put_u32(&mut out, 1200 + u32::from(self.id));
        put_f32(&mut out, 20.0);
        out.extend(fixed(b"c01", 16));
        for monster in [7u32, 0, 9] {
            put_u32(&mut out, monster);
        }
        put_u16(&mut out, 2);
        put_u16(&mut out, 5);
        path(&mut out, self.waypoints, 0.0);
        put_u32(&mut out, 1);
        put_u32(&mut out, 0);
        put_u32(&mut out, 2);
        for word in 0..29u32 {
            put_u32(&mut out, 0xA000 + word);
        }
        assert_eq!(out.len() as u64, NPC_RECORD_SIZE);
        out
    }
}

pub struct ObjectFixture {
    pub variant: GameVariant,
    pub id: u8,
    pub name: Vec<u8>,
    pub dependent_scene: Vec<u8>,
}

impl ObjectFixture {
    pub fn new(variant: GameVariant, id: u8, name: &str) -> Self {
        ObjectFixture {
            variant,
            id,
            name: name.as_bytes().to_vec(),
            dependent_scene: b"m01".to_vec(),
        }
    }

    pub fn bytes(&self) -> Vec<u8> {
        let pal3a = self.variant == GameVariant::Pal3A;
        let mut out = Vec::new();
        out.extend([self.id, 1, 0xFF, 0]);
        out.extend(fixed(&self.name, 32));
        put_u16(&mut out, 2);
        put_u16(&mut out, 1);
        put_vec3(&mut out, [100.0, 5.0, -50.0]);
        put_f32(&mut out, 90.0);
        for edge in [-1i32, 2, 3, 4] {
            put_i32(&mut out, edge);
        }
        out.extend([0x16, 1, 0, 3]);
        if pal3a {
            for value in [1.5f32, 2.0, 0.0, 0.0, 0.0, 7.9] {
                put_f32(&mut out, value);
            }
            out.extend([0xDE, 0xAD, 0xBE, 0xEF]);
        } else {
            for value in [1i32, 2, 3, 4, 5, -6] {
                put_i32(&mut out, value);
            }
        }
        for requirement in 10u16..16 {
            put_u16(&mut out, requirement);
        }
        out.extend(fixed(b"locked", 16));
        if pal3a {
            out.extend([1, 2, 3, 4]);
        }
        put_u32(&mut out, 555);
        path(&mut out, 0, 9.0);
        put_u16(&mut out, 0x0102);
        out.extend(fixed(&self.dependent_scene, 32));
        put_u16(&mut out, 7);
        put_vec3(&mut out, [-1.0, -2.0, -3.0]);
        put_vec3(&mut out, [1.0, 2.0, 3.0]);
        put_f32(&mut out, 15.0);
        if pal3a {
            put_f32(&mut out, 30.0);
        }
        out.extend(fixed(b"wa001", 8));
        put_u32(&mut out, 42);
        put_u32(&mut out, 1);
        put_u32(&mut out, 0);
        let reserved = if pal3a { 45u32 } else { 52 };
        for word in 0..reserved {
            put_u32(&mut out, 0xB000 + word);
        }
        assert_eq!(out.len() as u64, self.variant.object_record_size());
        out
    }
}

/// Scene file assembled section by section with optional filler between them.
pub struct ScnFixture {
    pub magic: [u8; 4],
    pub version: i16,
    pub info: Vec<u8>,
    pub gap_before_npcs: Vec<u8>,
    pub npcs: Vec<Vec<u8>>,
    pub gap_before_objects: Vec<u8>,
    pub objects: Vec<Vec<u8>>,
}

impl ScnFixture {
    pub fn new() -> Self {
        ScnFixture {
            magic: *b"SCN\0",
            version: 1,
            info: scene_info(b"q01", b"q01a", b"1"),
            gap_before_npcs: Vec::new(),
            npcs: Vec::new(),
            gap_before_objects: Vec::new(),
            objects: Vec::new(),
        }
    }

    pub fn npc_offset(&self) -> u32 {
        (HEADER_SIZE + SCENE_INFO_SIZE) as u32 + self.gap_before_npcs.len() as u32
    }

    pub fn object_offset(&self) -> u32 {
        let npc_bytes: usize = self.npcs.iter().map(Vec::len).sum();
        self.npc_offset() + npc_bytes as u32 + self.gap_before_objects.len() as u32
    }

    pub fn header(&self, npc_offset: u32, object_offset: u32) -> Vec<u8> {
        let mut out = self.magic.to_vec();
        out.write_i16::<LittleEndian>(self.version).unwrap();
        out.write_i16::<LittleEndian>(self.npcs.len() as i16).unwrap();
        put_u32(&mut out, npc_offset);
        out.write_i16::<LittleEndian>(self.objects.len() as i16).unwrap();
        put_u32(&mut out, object_offset);
        assert_eq!(out.len() as u64, HEADER_SIZE);
        out
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = self.header(self.npc_offset(), self.object_offset());
        out.extend(&self.info);
        out.extend(&self.gap_before_npcs);
        for npc in &self.npcs {
            out.extend(npc);
        }
        out.extend(&self.gap_before_objects);
        for object in &self.objects {
            out.extend(object);
        }
        out
    }
}
