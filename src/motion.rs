//! Pointer-driven transforms and entrance timings.
//!
//! Everything here is a plain function of its inputs. The components feed in
//! pointer positions and element boxes and render the results as inline
//! styles; CSS transitions do the tweening.

use std::time::Duration;

/// How long a ripple stays on screen. Matches `animate-ripple` in the stylesheet.
pub const RIPPLE_DURATION: Duration = Duration::from_millis(600);

/// Pointer position relative to the top-left corner of an element's box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PointerOffset {
    pub fn within(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            x: client_x - left,
            y: client_y - top,
            width,
            height,
        }
    }

    /// Offset from the centre, each axis in `-0.5..=0.5` while inside the box.
    fn normalized(&self) -> Option<(f64, f64)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some((self.x / self.width - 0.5, self.y / self.height - 0.5))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    /// Degrees.
    pub rotate_x: f64,
    /// Degrees.
    pub rotate_y: f64,
    /// translateZ in px.
    pub lift: f64,
}

impl Tilt {
    pub const REST: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        lift: 0.0,
    };

    pub fn css(&self) -> String {
        format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateZ({:.0}px)",
            self.rotate_x, self.rotate_y, self.lift
        )
    }
}

/// Maps a pointer offset to a rotation toward the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltProfile {
    pub factor: f64,
    pub lift: f64,
    pub rest: Tilt,
}

impl TiltProfile {
    pub const HERO: TiltProfile = TiltProfile {
        factor: 10.0,
        lift: 0.0,
        rest: Tilt::REST,
    };
    pub const PORTRAIT: TiltProfile = TiltProfile {
        factor: 20.0,
        lift: 0.0,
        rest: Tilt {
            rotate_x: 5.0,
            rotate_y: 10.0,
            lift: 0.0,
        },
    };
    pub const CARD: TiltProfile = TiltProfile {
        factor: 20.0,
        lift: 50.0,
        rest: Tilt::REST,
    };

    pub fn tilt(&self, offset: PointerOffset) -> Tilt {
        match offset.normalized() {
            Some((mx, my)) => Tilt {
                rotate_x: -my * self.factor,
                rotate_y: mx * self.factor,
                lift: self.lift,
            },
            None => self.rest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Ripple {
    /// Diameter covers the whole button from any click point.
    pub fn new(id: u64, offset: PointerOffset) -> Self {
        Self {
            id,
            x: offset.x,
            y: offset.y,
            size: offset.width.max(offset.height) * 2.0,
        }
    }

    pub fn left(&self) -> f64 {
        self.x - self.size / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y - self.size / 2.0
    }

    pub fn css(&self) -> String {
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px",
            self.left(),
            self.top(),
            self.size,
            self.size
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ripples {
    next_id: u64,
    active: Vec<Ripple>,
}

impl Ripples {
    /// Adds a ripple and returns its id for later removal.
    pub fn spawn(&mut self, offset: PointerOffset) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(Ripple::new(id, offset));
        id
    }

    pub fn remove(&mut self, id: u64) {
        self.active.retain(|r| r.id != id);
    }

    pub fn active(&self) -> &[Ripple] {
        &self.active
    }
}

/// Entrance delay for the `index`th element of a staggered group.
pub fn stagger(index: usize, base: Duration, step: Duration) -> Duration {
    base + step * index as u32
}

/// Horizontal slide-in start offset; rows alternate sides.
pub fn slide_from(index: usize) -> i32 {
    if index % 2 == 0 {
        -20
    } else {
        20
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(x: f64, y: f64) -> PointerOffset {
        PointerOffset {
            x,
            y,
            width: 200.0,
            height: 100.0,
        }
    }

    #[test]
    fn test_centre_is_flat() {
        let t = TiltProfile::HERO.tilt(at(100.0, 50.0));
        assert_eq!(t.rotate_x, 0.0);
        assert_eq!(t.rotate_y, 0.0);
    }

    #[test]
    fn test_corner_tilts_toward_pointer() {
        // top-left: top edge toward viewer, left edge away
        let t = TiltProfile::HERO.tilt(at(0.0, 0.0));
        assert_eq!(t.rotate_x, 5.0);
        assert_eq!(t.rotate_y, -5.0);

        let t = TiltProfile::CARD.tilt(at(200.0, 100.0));
        assert_eq!(t.rotate_x, -10.0);
        assert_eq!(t.rotate_y, 10.0);
        assert_eq!(t.lift, 50.0);
    }

    #[test]
    fn test_card_matches_edge_formula() {
        // rotateX = 20 * (0.5 - y/h), rotateY = -20 * (0.5 - x/w)
        let offset = at(50.0, 80.0);
        let t = TiltProfile::CARD.tilt(offset);
        assert!((t.rotate_x - 20.0 * (0.5 - 80.0 / 100.0)).abs() < 1e-9);
        assert!((t.rotate_y - -20.0 * (0.5 - 50.0 / 200.0)).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_box_rests() {
        let offset = PointerOffset {
            x: 3.0,
            y: 4.0,
            width: 0.0,
            height: 10.0,
        };
        assert_eq!(TiltProfile::HERO.tilt(offset), Tilt::REST);
        assert_eq!(
            TiltProfile::PORTRAIT.tilt(offset),
            TiltProfile::PORTRAIT.rest
        );
    }

    #[test]
    fn test_offset_within() {
        let o = PointerOffset::within(130.0, 240.0, 100.0, 200.0, 60.0, 80.0);
        assert_eq!(o, PointerOffset { x: 30.0, y: 40.0, width: 60.0, height: 80.0 });
    }

    #[test]
    fn test_tilt_css() {
        let t = Tilt {
            rotate_x: 5.0,
            rotate_y: -2.5,
            lift: 50.0,
        };
        assert_eq!(
            t.css(),
            "transform: perspective(1000px) rotateX(5.00deg) rotateY(-2.50deg) translateZ(50px)"
        );
    }

    #[test]
    fn test_ripple_geometry() {
        let r = Ripple::new(0, at(20.0, 30.0));
        assert_eq!(r.size, 400.0);
        assert_eq!(r.left(), -180.0);
        assert_eq!(r.top(), -170.0);
        assert_eq!(r.css(), "left: -180px; top: -170px; width: 400px; height: 400px");
    }

    #[test]
    fn test_ripples_removed_by_id() {
        let mut ripples = Ripples::default();
        let a = ripples.spawn(at(1.0, 1.0));
        let b = ripples.spawn(at(2.0, 2.0));
        assert_ne!(a, b);
        assert_eq!(ripples.active().len(), 2);

        ripples.remove(a);
        assert_eq!(ripples.active().iter().map(|r| r.id).collect::<Vec<_>>(), vec![b]);

        // ids are never reused
        let c = ripples.spawn(at(3.0, 3.0));
        assert!(c > b);
        ripples.remove(b);
        ripples.remove(c);
        assert!(ripples.active().is_empty());
    }

    #[test]
    fn test_stagger_and_slide() {
        let step = Duration::from_millis(100);
        assert_eq!(stagger(0, Duration::ZERO, step), Duration::ZERO);
        assert_eq!(
            stagger(3, Duration::from_millis(200), step),
            Duration::from_millis(500)
        );
        assert_eq!(slide_from(0), -20);
        assert_eq!(slide_from(1), 20);
        assert_eq!(slide_from(4), -20);
    }

    proptest! {
        #[test]
        fn prop_tilt_bounded_inside_box(
            fx in 0.0f64..=1.0,
            fy in 0.0f64..=1.0,
            w in 1.0f64..2000.0,
            h in 1.0f64..2000.0,
        ) {
            for profile in [TiltProfile::HERO, TiltProfile::PORTRAIT, TiltProfile::CARD] {
                let t = profile.tilt(PointerOffset { x: fx * w, y: fy * h, width: w, height: h });
                let limit = profile.factor / 2.0 + 1e-9;
                prop_assert!(t.rotate_x.abs() <= limit);
                prop_assert!(t.rotate_y.abs() <= limit);
            }
        }
    }
}
