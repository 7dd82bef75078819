//! Gallows illustration
//!
//! Maps a drawing stage to the shapes that make up the scene. Coordinates
//! live on a 300x300 board with the origin at the bottom left.

use crate::MAX_WRONG;

/// Width and height of the drawing board
pub const BOARD_SIZE: f64 = 300.0;

/// A primitive the renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Segment {
        from: (f64, f64),
        to: (f64, f64),
    },
    Circle {
        center: (f64, f64),
        radius: f64,
    },
}

/// Base, pole, beam and rope; drawn at every stage
pub const GALLOWS: [Shape; 4] = [
    Shape::Segment {
        from: (50.0, 50.0),
        to: (150.0, 50.0),
    },
    Shape::Segment {
        from: (70.0, 50.0),
        to: (70.0, 250.0),
    },
    Shape::Segment {
        from: (70.0, 250.0),
        to: (170.0, 250.0),
    },
    Shape::Segment {
        from: (170.0, 250.0),
        to: (170.0, 230.0),
    },
];

/// Body parts in the order they appear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    pub const ALL: [BodyPart; MAX_WRONG as usize] = [
        BodyPart::Head,
        BodyPart::Torso,
        BodyPart::LeftArm,
        BodyPart::RightArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
    ];

    pub fn shape(&self) -> Shape {
        match self {
            BodyPart::Head => Shape::Circle {
                center: (170.0, 210.0),
                radius: 15.0,
            },
            BodyPart::Torso => Shape::Segment {
                from: (170.0, 195.0),
                to: (170.0, 135.0),
            },
            BodyPart::LeftArm => Shape::Segment {
                from: (150.0, 175.0),
                to: (170.0, 185.0),
            },
            BodyPart::RightArm => Shape::Segment {
                from: (190.0, 175.0),
                to: (170.0, 185.0),
            },
            BodyPart::LeftLeg => Shape::Segment {
                from: (170.0, 135.0),
                to: (150.0, 105.0),
            },
            BodyPart::RightLeg => Shape::Segment {
                from: (170.0, 135.0),
                to: (190.0, 105.0),
            },
        }
    }
}

/// Body parts visible at `stage`; stages past the last part show the full figure
pub fn parts_for_stage(stage: u8) -> &'static [BodyPart] {
    let visible = usize::from(stage).min(BodyPart::ALL.len());
    &BodyPart::ALL[..visible]
}

/// Every shape to draw at `stage`: the gallows followed by the visible parts
pub fn scene(stage: u8) -> Vec<Shape> {
    GALLOWS
        .iter()
        .copied()
        .chain(parts_for_stage(stage).iter().map(BodyPart::shape))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_zero_is_gallows_only() {
        assert!(parts_for_stage(0).is_empty());
        assert_eq!(scene(0), GALLOWS.to_vec());
    }

    #[test]
    fn test_each_stage_extends_the_previous() {
        for stage in 1..=MAX_WRONG {
            let previous = scene(stage - 1);
            let current = scene(stage);
            assert_eq!(current.len(), previous.len() + 1);
            assert_eq!(&current[..previous.len()], previous.as_slice());
        }
    }

    #[test]
    fn test_full_figure_at_max() {
        assert_eq!(parts_for_stage(MAX_WRONG), &BodyPart::ALL);
        assert_eq!(parts_for_stage(MAX_WRONG + 3).len(), BodyPart::ALL.len());
        assert_eq!(parts_for_stage(1), &[BodyPart::Head]);
    }

    #[test]
    fn test_shapes_fit_on_board() {
        for shape in scene(MAX_WRONG) {
            let points = match shape {
                Shape::Segment { from, to } => vec![from, to],
                Shape::Circle { center: (x, y), radius } => {
                    vec![(x - radius, y - radius), (x + radius, y + radius)]
                }
            };
            for (x, y) in points {
                assert!((0.0..=BOARD_SIZE).contains(&x));
                assert!((0.0..=BOARD_SIZE).contains(&y));
            }
        }
    }
}
