use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    /// Start a narration or dialogue voice line.
    PlayVoice { id: String },
    /// Fire a one-shot sound effect.
    PlayFx { id: String },
    /// Set the master volume, 0.0..=1.0.
    SetVolume { volume: f32 },
    Shutdown,
}

/// Messages sent *back* from the audio thread.
///
/// Failures are informational: the story never waits on audio, so a
/// `VoiceFailed` only ever becomes a log line while the caption runs on its
/// original schedule.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    VoiceStarted { id: String },
    VoiceFailed { id: String, error: String },
    VoiceFinished { id: String },
    FxStarted { id: String },
    FxFailed { id: String, error: String },
}
