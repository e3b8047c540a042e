//! Visual state of an animated element: opacity plus a 2D transform.

/// Opacity and transform of one element at one point of an animation.
///
/// `x`/`y` are pixel offsets, `rotate` is in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate: f32,
}

impl VisualState {
    /// Fully opaque, untransformed.
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    /// Fully transparent, otherwise at rest.
    pub const TRANSPARENT: Self = Self::REST.with_opacity(0.0);

    pub const fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }

    pub const fn offset(self, x: f32, y: f32) -> Self {
        Self { x, y, ..self }
    }

    pub const fn scaled(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    pub const fn rotated(self, rotate: f32) -> Self {
        Self { rotate, ..self }
    }

    pub fn is_untransformed(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.scale == 1.0 && self.rotate == 0.0
    }

    /// Declarations on the reveal channel: `opacity` plus the individual
    /// `translate` / `scale` / `rotate` properties.
    ///
    /// The hover layer and ambient loops own the `transform` property, so
    /// an element can reveal and react to the pointer without one rule
    /// overriding the other. Identity parts are `none`: any other value
    /// makes the element a containing block for fixed descendants.
    pub fn reveal_declarations(&self) -> String {
        let translate = if self.x == 0.0 && self.y == 0.0 {
            "none".to_string()
        } else {
            format!("{}px {}px", num(self.x), num(self.y))
        };
        let scale = if self.scale == 1.0 {
            "none".to_string()
        } else {
            num(self.scale)
        };
        let rotate = if self.rotate == 0.0 {
            "none".to_string()
        } else {
            format!("{}deg", num(self.rotate))
        };
        format!(
            "opacity: {}; translate: {translate}; scale: {scale}; rotate: {rotate};",
            num(self.opacity),
        )
    }

    /// Value for the `transform` property (hover and ambient channel).
    /// Identity parts are omitted; a fully untransformed state is `none`.
    pub fn transform_css(&self) -> String {
        let mut parts = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!("translate({}px, {}px)", num(self.x), num(self.y)));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", num(self.scale)));
        }
        if self.rotate != 0.0 {
            parts.push(format!("rotate({}deg)", num(self.rotate)));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

/// Compact decimal: at most three fractional digits, trailing zeros dropped.
pub(crate) fn num(value: f32) -> String {
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Milliseconds as a CSS time value in seconds (`150` → `0.15s`).
pub(crate) fn secs(ms: u32) -> String {
    format!("{}s", num(ms as f32 / 1000.0))
}
