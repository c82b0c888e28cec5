// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas.
//!
//! The spinner holds no clock of its own: the caller passes the rotation
//! derived from the shared animation tick, so every card spinner turns in
//! step.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Full turns per second.
const TURNS_PER_SECOND: f32 = 1.0;

const ARC_SEGMENTS: u16 = 30;

/// Rotation angle in radians after `elapsed` of animation.
#[must_use]
pub fn rotation_at(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() * TURNS_PER_SECOND * TAU) % TAU
}

/// Half-circle arc spinning around a faint full ring.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self.cache.clear();
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let stroke_width = (self.size / 16.0).max(2.0);
                let radius = (frame.width().min(frame.height()) / 2.0 - stroke_width).max(1.0);

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(stroke_width).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Arc starts at twelve o'clock
                let start_angle = self.rotation - PI / 2.0;
                let end_angle = start_angle + PI;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));

                for i in 1..=ARC_SEGMENTS {
                    let t = f32::from(i) / f32::from(ARC_SEGMENTS);
                    let angle = start_angle + (end_angle - start_angle) * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(stroke_width)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_every_turn() {
        assert_eq!(rotation_at(Duration::ZERO), 0.0);
        let half = rotation_at(Duration::from_millis(500));
        assert!((half - PI).abs() < 1e-4);
        for millis in [999, 1_250, 7_777] {
            let angle = rotation_at(Duration::from_millis(millis));
            assert!((0.0..TAU).contains(&angle));
        }
    }
}
