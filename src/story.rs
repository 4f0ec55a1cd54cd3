//! The Tortoise and the Hare, staged.
//!
//! Six scenes, built once at startup as plain data: prop placements, opening
//! step lists, and branch tables keyed by affordance id. The durations and
//! positions here are the story's timing — narration banners display for
//! their configured seconds, character movements take their configured
//! seconds, and the finish-line race releases the hare only after the
//! tortoise passes 80% of its run.

use glam::Vec3;
use rustc_hash::FxHashMap;
use smallvec::smallvec;

use crate::components::script::{ChoiceOption, Step};
use crate::resources::storybook::{PropSpec, SceneDefinition, StoryBook};

const NARRATION_ANCHOR: Vec3 = Vec3::new(0.0, 1.5, 0.0);

fn narration(voice: &str, text: &str, seconds: f32) -> Step {
    Step::Narration {
        voice: Some(voice.into()),
        text: text.into(),
        anchor: NARRATION_ANCHOR,
        seconds,
    }
}

fn dialogue(speaker: &str, voice: &str, text: &str, anchor: Vec3, seconds: f32) -> Step {
    Step::Dialogue {
        speaker: speaker.into(),
        voice: Some(voice.into()),
        text: text.into(),
        anchor,
        seconds,
    }
}

fn play_clip(actor: &str, clip: &str) -> Step {
    Step::PlayClip {
        actor: actor.into(),
        clip: clip.into(),
    }
}

fn branches<const N: usize>(entries: [(&str, Vec<Step>); N]) -> FxHashMap<String, Vec<Step>> {
    entries
        .into_iter()
        .map(|(id, steps)| (id.to_string(), steps))
        .collect()
}

/// Build the full six-scene story.
pub fn storybook() -> StoryBook {
    StoryBook::new(vec![
        first_meeting(),
        race_begins(),
        tortoise_keeps_going(),
        nap_scene(),
        finish_line(),
        moral_ending(),
    ])
}

/// Scene 1: both characters meet on the forest path; talking to the hare
/// runs the challenge dialogue and offers the race.
fn first_meeting() -> SceneDefinition {
    SceneDefinition {
        id: "intro",
        title: "Scene 1: The First Meeting",
        instructions: "",
        props: vec![
            PropSpec::new("grassPatch", Vec3::ZERO),
            PropSpec::new("dirtPath", Vec3::new(0.0, 0.01, 0.0)),
            PropSpec::new("tree", Vec3::new(1.0, 0.0, -1.0)).rotated(0.0, 45.0, 0.0),
            PropSpec::new("tortoise", Vec3::new(-0.6, 0.3, 0.0))
                .rotated(0.0, 90.0, 0.0)
                .playing("idle")
                .as_actor("tortoise"),
            PropSpec::new("hare", Vec3::new(0.5, 0.0, 0.0))
                .rotated(0.0, -90.0, 0.0)
                .playing("idle")
                .as_actor("hare"),
        ],
        opening: vec![
            narration(
                "narration1",
                "One sunny morning, the Tortoise and the Hare met on a forest path. \
                 They'd never raced before… but something was in the air.",
                9.0,
            ),
            Step::ShowAffordance {
                id: "talk".into(),
                label: "Talk".into(),
            },
        ],
        branches: branches([
            (
                "talk",
                vec![
                    play_clip("hare", "smug"),
                    dialogue(
                        "Hare",
                        "hare1",
                        "Hey slowpoke, want to race just for fun?",
                        Vec3::new(0.5, 1.0, 0.0),
                        5.0,
                    ),
                    play_clip("tortoise", "blink"),
                    dialogue(
                        "Tortoise",
                        "tortoise1",
                        "Sure, let's see who keeps going longer.",
                        Vec3::new(-0.5, 1.0, 0.0),
                        5.0,
                    ),
                    play_clip("hare", "idle"),
                    play_clip("tortoise", "idle"),
                    Step::ShowAffordance {
                        id: "start_race".into(),
                        label: "Start the Race".into(),
                    },
                ],
            ),
            ("start_race", vec![Step::LoadScene { index: 1 }]),
        ]),
    }
}

/// Scene 2: the start. The hare dashes, the tortoise plods, both at once.
fn race_begins() -> SceneDefinition {
    SceneDefinition {
        id: "race-begins",
        title: "Scene 2: The Race Begins",
        instructions: "",
        props: vec![
            PropSpec::new("grassPatch", Vec3::ZERO).scaled(2.0, 1.0, 2.0),
            PropSpec::new("dirtPath", Vec3::new(0.0, 0.01, 0.0))
                .rotated(0.0, 90.0, 0.0)
                .scaled(2.0, 1.0, 1.0),
            PropSpec::new("tree", Vec3::new(-1.0, 0.0, -1.0)).rotated(0.0, 45.0, 0.0),
            PropSpec::new("tree", Vec3::new(1.0, 0.0, -1.0)).rotated(0.0, -30.0, 0.0),
            PropSpec::new("tortoise", Vec3::new(-1.0, 0.3, 0.6))
                .rotated(0.0, 90.0, 0.0)
                .as_actor("tortoise"),
            PropSpec::new("hare", Vec3::new(-0.8, 0.0, -0.6))
                .rotated(0.0, 90.0, 0.0)
                .as_actor("hare"),
        ],
        opening: vec![
            narration(
                "narration2",
                "The race began! The Hare took off with lightning speed while the \
                 Tortoise moved steadily.",
                6.0,
            ),
            play_clip("hare", "run"),
            play_clip("tortoise", "walk"),
            Step::MoveActor {
                actor: "hare".into(),
                from: Vec3::new(-0.8, 0.0, -0.6),
                to: Vec3::new(1.0, 0.0, -0.6),
                seconds: 3.0,
                done_flag: None,
                milestone: None,
            },
            Step::MoveActor {
                actor: "tortoise".into(),
                from: Vec3::new(-1.0, 0.3, 0.6),
                to: Vec3::new(-0.5, 0.3, 0.6),
                seconds: 6.0,
                done_flag: None,
                milestone: None,
            },
            Step::Wait { seconds: 6.0 },
            Step::ShowAffordance {
                id: "continue".into(),
                label: "Continue".into(),
            },
        ],
        branches: branches([("continue", vec![Step::LoadScene { index: 2 }])]),
    }
}

/// Scene 3: the tortoise keeps going; tapping it reveals its thoughts. The
/// continue button appears when the crawl finishes.
fn tortoise_keeps_going() -> SceneDefinition {
    SceneDefinition {
        id: "tortoise-keeps-going",
        title: "Scene 3: Tortoise Keeps Going",
        instructions: "Tap on Tortoise to hear his thoughts",
        props: vec![
            PropSpec::new("grassPatch", Vec3::ZERO).scaled(2.0, 1.0, 2.0),
            PropSpec::new("dirtPath", Vec3::new(0.0, 0.01, 0.0))
                .rotated(0.0, 90.0, 0.0)
                .scaled(2.0, 1.0, 1.0),
            PropSpec::new("tree", Vec3::new(-1.0, 0.0, -1.0)).rotated(0.0, 45.0, 0.0),
            PropSpec::new("tree", Vec3::new(1.0, 0.0, -1.0)).rotated(0.0, -30.0, 0.0),
            PropSpec::new("tortoise", Vec3::new(-0.5, 0.3, 0.0))
                .rotated(0.0, 90.0, 0.0)
                .playing("walk")
                .as_actor("tortoise")
                .tappable("tortoise"),
        ],
        opening: vec![
            narration(
                "narration3",
                "As Hare speeds ahead, Tortoise stays focused, moving at his own pace.",
                6.0,
            ),
            Step::MoveActor {
                actor: "tortoise".into(),
                from: Vec3::new(-0.5, 0.3, 0.0),
                to: Vec3::new(0.5, 0.3, 0.0),
                seconds: 10.0,
                done_flag: Some("tortoise_done".into()),
                milestone: None,
            },
            Step::AwaitFlag {
                flag: "tortoise_done".into(),
            },
            Step::ShowAffordance {
                id: "continue".into(),
                label: "Continue".into(),
            },
        ],
        branches: branches([
            (
                "tortoise",
                vec![
                    play_clip("tortoise", "blink"),
                    dialogue(
                        "Tortoise",
                        "tortoise2",
                        "No rush. I'll just keep moving forward.",
                        Vec3::new(-0.5, 1.0, 0.0),
                        5.0,
                    ),
                    play_clip("tortoise", "walk"),
                ],
            ),
            ("continue", vec![Step::LoadScene { index: 3 }]),
        ]),
    }
}

/// The two nap-scene options. The sleep branch re-issues exactly this
/// choice; the cheer branch never does.
fn nap_choice() -> Step {
    Step::ShowChoice {
        options: smallvec![
            ChoiceOption::new("sleep", "Let Hare Sleep"),
            ChoiceOption::new("cheer", "Cheer for Tortoise"),
        ],
    }
}

/// Scene 4: the decision node. "Let Hare Sleep" loops back to the same
/// choice; "Cheer for Tortoise" moves the story forward.
fn nap_scene() -> SceneDefinition {
    SceneDefinition {
        id: "nap-scene",
        title: "Scene 4: The Nap Scene – You Decide",
        instructions: "Choose what happens next",
        props: vec![
            PropSpec::new("grassPatch", Vec3::ZERO).scaled(3.0, 1.0, 3.0),
            PropSpec::new("dirtPath", Vec3::new(0.0, 0.01, 0.0))
                .rotated(0.0, 90.0, 0.0)
                .scaled(2.0, 1.0, 1.0),
            PropSpec::new("tree", Vec3::new(0.5, 0.0, -0.5)).rotated(0.0, 45.0, 0.0),
            PropSpec::new("hare", Vec3::new(0.5, 0.0, -0.3))
                .rotated(0.0, -45.0, 0.0)
                .playing("sleep")
                .as_actor("hare"),
            PropSpec::new("tortoise", Vec3::new(-0.5, 0.3, 0.3))
                .rotated(0.0, 90.0, 0.0)
                .playing("walk")
                .as_actor("tortoise"),
        ],
        opening: vec![
            narration(
                "narration4",
                "Hare, tired from his fast start, takes a nap, while Tortoise moves \
                 steadily forward.",
                6.0,
            ),
            nap_choice(),
        ],
        branches: branches([
            (
                "sleep",
                vec![
                    Step::PlayFx { id: "snore".into() },
                    narration("narration6", "The Hare continues to sleep soundly...", 4.0),
                    Step::Wait { seconds: 2.0 },
                    nap_choice(),
                ],
            ),
            (
                "cheer",
                vec![
                    Step::PlayFx { id: "cheer".into() },
                    play_clip("tortoise", "walk"),
                    Step::MoveActor {
                        actor: "tortoise".into(),
                        from: Vec3::new(-0.5, 0.3, 0.3),
                        to: Vec3::new(0.8, 0.3, 0.3),
                        seconds: 5.0,
                        done_flag: Some("tortoise_passed".into()),
                        milestone: None,
                    },
                    Step::AwaitFlag {
                        flag: "tortoise_passed".into(),
                    },
                    narration(
                        "narration7",
                        "The Tortoise moves ahead while the Hare sleeps!",
                        4.0,
                    ),
                    Step::ShowAffordance {
                        id: "continue".into(),
                        label: "Continue to Next Scene".into(),
                    },
                ],
            ),
            ("continue", vec![Step::LoadScene { index: 4 }]),
        ]),
    }
}

/// Scene 5: tap the finish line to run the final stretch. The hare only
/// appears two seconds after the tortoise passes 80% of its run, then
/// arrives just short of the line.
fn finish_line() -> SceneDefinition {
    SceneDefinition {
        id: "finish-line",
        title: "Scene 5: The Finish Line",
        instructions: "Tap on the finish line",
        props: vec![
            PropSpec::new("grassPatch", Vec3::ZERO).scaled(2.0, 1.0, 2.0),
            PropSpec::new("dirtPath", Vec3::new(0.0, 0.01, 0.0))
                .rotated(0.0, 90.0, 0.0)
                .scaled(2.0, 1.0, 1.0),
            PropSpec::new("finish", Vec3::new(0.8, 0.8, 0.0))
                .rotated(0.0, -90.0, 0.0)
                .scaled(0.25, 0.25, 0.25)
                .tappable("finish_line"),
            PropSpec::new("tortoise", Vec3::new(-1.1, 0.3, 0.2))
                .rotated(0.0, 90.0, 0.0)
                .playing("idle")
                .as_actor("tortoise"),
            PropSpec::new("hare", Vec3::new(-1.5, 0.0, -0.2))
                .rotated(0.0, 90.0, 0.0)
                .as_actor("hare")
                .hidden(),
        ],
        opening: Vec::new(),
        branches: branches([
            (
                "finish_line",
                vec![
                    play_clip("tortoise", "walk"),
                    Step::MoveActor {
                        actor: "tortoise".into(),
                        from: Vec3::new(-1.1, 0.3, 0.2),
                        to: Vec3::new(1.5, 0.3, 0.2),
                        seconds: 5.0,
                        done_flag: None,
                        milestone: Some((0.8, "tortoise_at_line".into())),
                    },
                    Step::AwaitFlag {
                        flag: "tortoise_at_line".into(),
                    },
                    Step::Wait { seconds: 2.0 },
                    Step::SetVisible {
                        actor: "hare".into(),
                        visible: true,
                    },
                    play_clip("hare", "run"),
                    Step::MoveActor {
                        actor: "hare".into(),
                        from: Vec3::new(-1.5, 0.0, -0.2),
                        to: Vec3::new(1.0, 0.0, -0.2),
                        seconds: 3.0,
                        done_flag: Some("hare_home".into()),
                        milestone: None,
                    },
                    Step::AwaitFlag {
                        flag: "hare_home".into(),
                    },
                    narration(
                        "narration8",
                        "And just like that, Tortoise crosses the finish line, steady and \
                         calm. Hare arrives just moments later, surprised and exhausted.",
                        9.0,
                    ),
                    Step::ShowAffordance {
                        id: "continue".into(),
                        label: "Continue".into(),
                    },
                ],
            ),
            ("continue", vec![Step::LoadScene { index: 5 }]),
        ]),
    }
}

/// Scene 6: the two stand together; tapping the quote board reveals the
/// moral and the exit.
fn moral_ending() -> SceneDefinition {
    SceneDefinition {
        id: "moral-ending",
        title: "Scene 6: Moral & Ending",
        instructions: "Tap on the quote board",
        props: vec![
            PropSpec::new("grassPatch", Vec3::ZERO).scaled(2.0, 1.0, 2.0),
            PropSpec::new("tortoise", Vec3::new(-0.6, 0.3, 0.0))
                .rotated(0.0, 45.0, 0.0)
                .playing("idle")
                .as_actor("tortoise"),
            PropSpec::new("hare", Vec3::new(0.6, 0.0, 0.0))
                .rotated(0.0, -45.0, 0.0)
                .playing("idle")
                .as_actor("hare"),
            PropSpec::new("quoteBoard", Vec3::new(0.0, 1.2, 0.0)).tappable("quote_board"),
        ],
        opening: vec![
            dialogue(
                "Tortoise",
                "tortoise3",
                "Slow and steady wins the race!",
                Vec3::new(-0.6, 1.0, 0.0),
                4.0,
            ),
            dialogue(
                "Hare",
                "hare2",
                "I... I should've kept going!",
                Vec3::new(0.6, 1.0, 0.0),
                4.0,
            ),
        ],
        branches: branches([
            (
                "quote_board",
                vec![
                    narration(
                        "narration9",
                        "The race doesn't always go to the fastest, but to those who \
                         keep going.",
                        9.0,
                    ),
                    Step::ShowAffordance {
                        id: "exit".into(),
                        label: "Exit Story".into(),
                    },
                ],
            ),
            (
                "exit",
                vec![
                    Step::Narration {
                        voice: None,
                        text: "Thanks for playing!".into(),
                        anchor: NARRATION_ANCHOR,
                        seconds: 4.0,
                    },
                    Step::SetFlag {
                        flag: "exit_story".into(),
                    },
                ],
            ),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_scenes_in_order() {
        let book = storybook();
        assert_eq!(book.len(), 6);
        let ids: Vec<&str> = (0..book.len())
            .map(|i| book.scene(i).unwrap().id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "intro",
                "race-begins",
                "tortoise-keeps-going",
                "nap-scene",
                "finish-line",
                "moral-ending",
            ]
        );
    }

    #[test]
    fn test_intro_places_five_props() {
        let book = storybook();
        let intro = book.scene(0).unwrap();
        assert_eq!(intro.props.len(), 5);

        let tortoise = intro
            .props
            .iter()
            .find(|p| p.actor.as_deref() == Some("tortoise"))
            .unwrap();
        assert_eq!(tortoise.position, Vec3::new(-0.6, 0.3, 0.0));

        let hare = intro
            .props
            .iter()
            .find(|p| p.actor.as_deref() == Some("hare"))
            .unwrap();
        assert_eq!(hare.position, Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_every_shown_affordance_has_a_branch() {
        let book = storybook();
        for i in 0..book.len() {
            let scene = book.scene(i).unwrap();
            let mut shown: Vec<String> = Vec::new();
            for spec in &scene.props {
                if let Some(tap) = &spec.tap {
                    shown.push(tap.clone());
                }
            }
            let all_steps = scene
                .opening
                .iter()
                .chain(scene.branches.values().flatten());
            for step in all_steps {
                match step {
                    Step::ShowAffordance { id, .. } => shown.push(id.clone()),
                    Step::ShowChoice { options } => {
                        shown.extend(options.iter().map(|o| o.id.clone()))
                    }
                    _ => {}
                }
            }
            for id in shown {
                assert!(
                    scene.branch(&id).is_some(),
                    "scene '{}' shows '{}' with no branch",
                    scene.id,
                    id
                );
            }
        }
    }

    #[test]
    fn test_sleep_branch_loops_cheer_branch_exits() {
        let book = storybook();
        let nap = book.scene(3).unwrap();

        let sleep = nap.branch("sleep").unwrap();
        assert!(
            matches!(sleep.last(), Some(Step::ShowChoice { .. })),
            "sleep branch must re-offer the choice"
        );

        let cheer = nap.branch("cheer").unwrap();
        assert!(
            !cheer.iter().any(|s| matches!(s, Step::ShowChoice { .. })),
            "cheer branch must never re-offer the choice"
        );
        assert!(
            matches!(cheer.last(), Some(Step::ShowAffordance { .. })),
            "cheer branch must end at the continuation affordance"
        );
    }

    #[test]
    fn test_scene_links_stay_in_bounds() {
        let book = storybook();
        for i in 0..book.len() {
            let scene = book.scene(i).unwrap();
            for steps in scene
                .branches
                .values()
                .chain(std::iter::once(&scene.opening))
            {
                for step in steps {
                    if let Step::LoadScene { index } = step {
                        assert!(
                            *index < book.len(),
                            "scene '{}' links out of bounds ({index})",
                            scene.id
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_finish_line_hare_waits_for_milestone() {
        let book = storybook();
        let race = book.scene(4).unwrap();
        let steps = race.branch("finish_line").unwrap();

        let milestone_pos = steps
            .iter()
            .position(|s| {
                matches!(
                    s,
                    Step::MoveActor {
                        milestone: Some((at, _)),
                        ..
                    } if (*at - 0.8).abs() < f32::EPSILON
                )
            })
            .expect("tortoise run carries the 80% milestone");
        let hare_reveal = steps
            .iter()
            .position(|s| matches!(s, Step::SetVisible { actor, visible: true } if actor == "hare"))
            .expect("hare becomes visible");
        assert!(milestone_pos < hare_reveal);
    }

    #[test]
    fn test_moral_scene_raises_exit_flag() {
        let book = storybook();
        let moral = book.scene(5).unwrap();
        let exit = moral.branch("exit").unwrap();
        assert!(
            exit.iter()
                .any(|s| matches!(s, Step::SetFlag { flag } if flag == "exit_story"))
        );
    }
}
