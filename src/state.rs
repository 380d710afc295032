use serde::{Deserialize, Serialize};

/// The image the dialog shows. Owned by the caller and passed down each render.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ImageSelection {
    pub src: String,
    #[serde(default)]
    pub title: String,
}

impl ImageSelection {
    pub fn new(src: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            title: title.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Gallery {
    pub images: Vec<ImageSelection>,
}

impl Gallery {
    pub fn demo() -> Self {
        let images = [
            (10, "Forest trail"),
            (28, "Mountain lake"),
            (42, "Coffee on the desk"),
            (63, "Harbor at dusk"),
            (84, "City lights"),
            (96, "Old bridge"),
        ]
        .into_iter()
        .map(|(id, title)| {
            ImageSelection::new(format!("https://picsum.photos/id/{id}/1200/800"), title)
        })
        .collect();
        Self { images }
    }
}
