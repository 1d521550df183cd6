/// Feature groups, in the order the painter emits them.
///
/// Later groups are painted over earlier ones (pupils over eye outlines, for example).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceFeature {
    Head,
    Eyes,
    Pupils,
    Eyebrows,
    Nose,
    Mouth,
}

impl FaceFeature {
    pub const DRAW_ORDER: [FaceFeature; 6] = [
        Self::Head,
        Self::Eyes,
        Self::Pupils,
        Self::Eyebrows,
        Self::Nose,
        Self::Mouth,
    ];
}

/// A primitive draw operation in device pixel coordinates.
///
/// Oval operations use the bounding box convention: `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    StrokeOval {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    FillOval {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
}

/// The drawing capability a face is painted onto.
///
/// Implementations receive device pixel coordinates only; all face-space math happens in
/// [`crate::FacePainter`].
pub trait DrawSurface {
    fn stroke_oval(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Called before the commands of each feature group.
    fn begin_feature(&mut self, _feature: FaceFeature) {}

    fn apply(&mut self, cmd: DrawCommand) {
        match cmd {
            DrawCommand::StrokeOval {
                x,
                y,
                width,
                height,
            } => self.stroke_oval(x, y, width, height),
            DrawCommand::FillOval {
                x,
                y,
                width,
                height,
            } => self.fill_oval(x, y, width, height),
            DrawCommand::Line { x1, y1, x2, y2 } => self.line(x1, y1, x2, y2),
        }
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn stroke_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        (**self).stroke_oval(x, y, width, height);
    }

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        (**self).fill_oval(x, y, width, height);
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        (**self).line(x1, y1, x2, y2);
    }

    fn begin_feature(&mut self, feature: FaceFeature) {
        (**self).begin_feature(feature);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DrawItem {
    pub feature: FaceFeature,
    #[serde(flatten)]
    pub command: DrawCommand,
}

/// A recording surface: the ordered command stream of one or more faces.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct DrawList {
    pub items: Vec<DrawItem>,
    #[serde(skip)]
    current: Option<FaceFeature>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn commands(&self) -> impl Iterator<Item = DrawCommand> + '_ {
        self.items.iter().map(|item| item.command)
    }

    pub fn feature_commands(&self, feature: FaceFeature) -> Vec<DrawCommand> {
        self.items
            .iter()
            .filter(|item| item.feature == feature)
            .map(|item| item.command)
            .collect()
    }

    /// Replay every recorded command onto another surface, feature markers included.
    pub fn replay<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let mut current = None;
        for item in &self.items {
            if current != Some(item.feature) {
                surface.begin_feature(item.feature);
                current = Some(item.feature);
            }
            surface.apply(item.command);
        }
    }

    fn push(&mut self, command: DrawCommand) {
        // Commands drawn outside a painter pass are attributed to the head group.
        let feature = self.current.unwrap_or(FaceFeature::Head);
        self.items.push(DrawItem { feature, command });
    }
}

impl PartialEq for DrawList {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for DrawList {}

impl DrawSurface for DrawList {
    fn stroke_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.push(DrawCommand::StrokeOval {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.push(DrawCommand::FillOval {
            x,
            y,
            width,
            height,
        });
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.push(DrawCommand::Line { x1, y1, x2, y2 });
    }

    fn begin_feature(&mut self, feature: FaceFeature) {
        self.current = Some(feature);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/command.rs"]
mod tests;
