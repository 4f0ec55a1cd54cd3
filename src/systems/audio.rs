//! Audio bridge systems and the built-in stub thread.
//!
//! The story side writes [`AudioCmd`] messages; these systems forward them
//! over the bridge channel, drain the thread's responses back into the ECS
//! message queue, and log the outcomes. The contract is fire-and-continue:
//! nothing here ever blocks or delays the narrative, and a playback failure
//! is reported once and forgotten.
//!
//! [`stub_audio_thread`] is the built-in bridge peer: it acknowledges every
//! command with started/finished messages and logs what a real player would
//! do. A platform with an actual audio device replaces it by handing its own
//! channels to [`AudioBridge::new`](crate::resources::audio::AudioBridge).

use crate::error::StoryError;
use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::Messages;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, warn};

/// Forward ECS [`AudioCmd`] messages to the audio thread.
pub fn forward_audio_cmds(
    bridge: Option<Res<AudioBridge>>,
    mut reader: MessageReader<AudioCmd>,
) {
    let Some(bridge) = bridge else { return };
    for cmd in reader.read() {
        // Send errors only happen during shutdown; drop silently.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Drain pending audio-thread responses into the ECS message queue.
pub fn poll_audio_messages(
    bridge: Option<Res<AudioBridge>>,
    mut writer: MessageWriter<AudioMessage>,
) {
    let Some(bridge) = bridge else { return };
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioCmd`].
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Log playback outcomes.
///
/// Failures map to [`StoryError::Playback`] and stop there: the caption that
/// requested the voice line is already running on its own schedule.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::VoiceFailed { id, error } => warn!(
                "{}",
                StoryError::Playback {
                    id: id.clone(),
                    reason: error.clone(),
                }
            ),
            AudioMessage::FxFailed { id, error } => warn!(
                "{}",
                StoryError::Playback {
                    id: id.clone(),
                    reason: error.clone(),
                }
            ),
            other => debug!("audio: {other:?}"),
        }
    }
}

/// Entry point of the built-in bridge thread.
///
/// Owns no real audio device; it acknowledges commands so the message flow
/// matches a real player's. Blocks on the command channel and exits on
/// [`AudioCmd::Shutdown`] or channel close.
pub fn stub_audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    debug!(
        "[audio] stub thread starting (id={:?})",
        std::thread::current().id()
    );
    let mut volume = 1.0f32;

    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::PlayVoice { id } => {
                info!("[audio] voice '{id}' (volume {volume:.2})");
                let _ = tx_msg.send(AudioMessage::VoiceStarted { id: id.clone() });
                let _ = tx_msg.send(AudioMessage::VoiceFinished { id });
            }
            AudioCmd::PlayFx { id } => {
                info!("[audio] fx '{id}' (volume {volume:.2})");
                let _ = tx_msg.send(AudioMessage::FxStarted { id });
            }
            AudioCmd::SetVolume { volume: v } => {
                volume = v.clamp(0.0, 1.0);
            }
            AudioCmd::Shutdown => break,
        }
    }
    debug!("[audio] stub thread exiting");
}
