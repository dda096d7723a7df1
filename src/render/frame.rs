use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CanvasLayerKind, DrawCommand, LinePrimitive, TextPrimitive};

/// Primitives of one layer plus the horizontal translation the surface applies
/// before drawing them.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerFrame {
    pub kind: CanvasLayerKind,
    pub translate_x: f64,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerFrame {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            translate_x: 0.0,
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerFrame>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerFrame::new)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerFrame> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerFrame> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    pub fn set_translate_x(&mut self, kind: CanvasLayerKind, translate_x: f64) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.translate_x = translate_x;
        }
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn extend_lines(
        &mut self,
        kind: CanvasLayerKind,
        lines: impl IntoIterator<Item = LinePrimitive>,
    ) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.extend(lines);
        }
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    /// Flattens layers in paint order, baking each layer's translation into
    /// the emitted coordinates.
    #[must_use]
    pub fn to_draw_commands(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(self.line_count() + self.text_count());
        for layer in &self.layers {
            let dx = layer.translate_x;
            commands.extend(
                layer
                    .lines
                    .iter()
                    .map(|line| DrawCommand::Line(line.translated_x(dx))),
            );
            commands.extend(layer.texts.iter().map(|text| {
                let mut text = text.clone();
                text.x += dx;
                DrawCommand::Text(text)
            }));
        }
        commands
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerFrame::is_empty)
    }

    /// Validates geometry. An empty frame is always valid, so a viewport that
    /// is not laid out yet produces a harmless no-op pass.
    pub fn validate(&self) -> ChartResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            if !layer.translate_x.is_finite() {
                return Err(ChartError::InvalidData(
                    "layer translation must be finite".to_owned(),
                ));
            }
            for line in &layer.lines {
                line.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }
}
