use bevy_ecs::message::Message;

/// A user interaction, translated by the platform's gesture/tap layer.
///
/// The raycasting and gesture recognition that produce these live outside
/// the engine; by the time a command arrives here it is already resolved to
/// either an affordance activation or a navigation request.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum InteractionCmd {
    /// Activate the affordance with the given branch id (a button press or
    /// a tap on a tappable prop).
    Activate(String),
    /// Go to the next scene, wrapping past the last.
    Advance,
    /// Go to the previous scene, wrapping before the first.
    Retreat,
}
