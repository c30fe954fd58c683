pub mod binary;
pub mod error;
pub mod scn;
pub mod text;

pub use binary::BinaryCursor;
pub use error::ScnError;
pub use scn::{
    ActorBehaviour, ActorKind, BoundingBox, DecodedScene, DecoderConfig, Diagnostic,
    DiagnosticSection, GameVariant, ModelAsset, ModelKind, NpcRecord, ObjectParameters,
    ObjectRecord, ObjectRequirements, ObjectType, ParseVariantError, ReservedBytes,
    ReservedWords, SceneDescriptor, SceneFileDecoder, SceneInfo, SceneType, ScnHeader, ScnPath,
    TriggerRect, Vec3,
};
pub use text::TextCodec;
