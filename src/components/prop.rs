use bevy_ecs::prelude::Component;

/// A placed model instance.
///
/// `model_key` names an entry in the
/// [`ModelCatalog`](crate::resources::models::ModelCatalog); the platform
/// layer resolves it to the actual asset. `visible` mirrors the source
/// story's show/hide attribute (the hare at the finish line starts hidden).
#[derive(Component, Clone, Debug)]
pub struct Prop {
    pub model_key: String,
    pub visible: bool,
}

impl Prop {
    pub fn new(model_key: impl Into<String>) -> Self {
        Prop {
            model_key: model_key.into(),
            visible: true,
        }
    }

    pub fn hidden(model_key: impl Into<String>) -> Self {
        Prop {
            model_key: model_key.into(),
            visible: false,
        }
    }
}
