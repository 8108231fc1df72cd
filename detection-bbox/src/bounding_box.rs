use crate::{
    coerce::Coerce,
    common::*,
    error::{Error, Invariant, Result},
    Rect,
};

/// Detected bounding box in pixel coordinates with its confidence score.
///
/// The box is immutable once constructed. Construction guarantees
/// `x_min <= x_max`, `y_min <= y_max` and `0 <= probability <= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, CopyGetters)]
#[serde(try_from = "RawBoundingBox")]
pub struct BoundingBox {
    #[getset(get_copy = "pub")]
    x_min: i64,
    #[getset(get_copy = "pub")]
    y_min: i64,
    #[getset(get_copy = "pub")]
    x_max: i64,
    #[getset(get_copy = "pub")]
    y_max: i64,
    probability: R64,
}

impl BoundingBox {
    /// Build a box from raw values, coercing the coordinates to `i64` and the
    /// probability to `f64` before validation.
    ///
    /// Only the first failure is reported. Coercion runs in field order and
    /// precedes all invariant checks.
    pub fn try_new<C, P>(x_min: C, y_min: C, x_max: C, y_max: C, probability: P) -> Result<Self>
    where
        C: Coerce,
        P: Coerce,
    {
        let x_min = coerce_field("x_min", x_min.coerce_i64(), "i64")?;
        let y_min = coerce_field("y_min", y_min.coerce_i64(), "i64")?;
        let x_max = coerce_field("x_max", x_max.coerce_i64(), "i64")?;
        let y_max = coerce_field("y_max", y_max.coerce_i64(), "i64")?;
        let probability = coerce_field("probability", probability.coerce_f64(), "f64")?;
        Self::try_from_xyxy([x_min, y_min, x_max, y_max], probability)
    }

    /// Build a box from `[x_min, y_min, x_max, y_max]` corners.
    pub fn try_from_xyxy(xyxy: [i64; 4], probability: f64) -> Result<Self> {
        let [x_min, y_min, x_max, y_max] = xyxy;

        let checked = if x_min > x_max {
            Err(Invariant::XOrder)
        } else if y_min > y_max {
            Err(Invariant::YOrder)
        } else {
            R64::try_new(probability)
                .filter(|prob| (0.0..=1.0).contains(&prob.raw()))
                .ok_or(Invariant::ProbabilityRange)
        };

        let probability = checked.map_err(|invariant| {
            debug!(
                "rejected bounding box {:?} with probability {}: {}",
                xyxy, probability, invariant
            );
            Error::from(invariant)
        })?;

        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
            probability,
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability.raw()
    }

    /// Corners in `[x_min, y_min, x_max, y_max]` order.
    pub fn xyxy(&self) -> [i64; 4] {
        [self.x_min, self.y_min, self.x_max, self.y_max]
    }

    /// The flat JSON object of the four coordinates and the probability.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "x_min": self.x_min,
            "y_min": self.y_min,
            "x_max": self.x_max,
            "y_max": self.y_max,
            "probability": self.probability.raw(),
        })
    }
}

impl Rect for BoundingBox {
    fn x_min(&self) -> i64 {
        self.x_min
    }

    fn y_min(&self) -> i64 {
        self.y_min
    }

    fn x_max(&self) -> i64 {
        self.x_max
    }

    fn y_max(&self) -> i64 {
        self.y_max
    }
}

impl TryFrom<RawBoundingBox> for BoundingBox {
    type Error = Error;

    fn try_from(from: RawBoundingBox) -> Result<Self, Self::Error> {
        let RawBoundingBox {
            x_min,
            y_min,
            x_max,
            y_max,
            probability,
        } = from;
        Self::try_new(x_min, y_min, x_max, y_max, probability)
    }
}

/// Deserialized fields before coercion.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBoundingBox {
    x_min: Value,
    y_min: Value,
    x_max: Value,
    y_max: Value,
    probability: Value,
}

fn coerce_field<T>(field: &'static str, value: Option<T>, target: &'static str) -> Result<T> {
    value.ok_or_else(|| {
        debug!("unable to convert '{}' to {}", field, target);
        Error::TypeConversion { field, target }
    })
}
