use anyhow::Result;
use approx::assert_abs_diff_eq;
use detection_bbox::BoundingBox;
use serde_json::json;

#[test]
fn encode_flat_fields() -> Result<()> {
    let bbox = BoundingBox::try_new(50, 60, 100, 120, 0.875)?;
    let text = serde_json::to_string(&bbox)?;
    assert_eq!(
        text,
        r#"{"x_min":50,"y_min":60,"x_max":100,"y_max":120,"probability":0.875}"#
    );
    Ok(())
}

#[test]
fn decode_coerces_fields() -> Result<()> {
    let bbox: BoundingBox = serde_json::from_value(json!({
        "x_min": "50",
        "y_min": 60.9,
        "x_max": 100,
        "y_max": 120,
        "probability": "0.5",
    }))?;
    assert_eq!(bbox.xyxy(), [50, 60, 100, 120]);
    assert_abs_diff_eq!(bbox.probability(), 0.5);
    Ok(())
}

#[test]
fn decode_validates_fields() {
    let err = serde_json::from_str::<BoundingBox>(
        r#"{"x_min":10,"y_min":0,"x_max":0,"y_max":10,"probability":0.5}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("'x_min' must be smaller than 'x_max'"));

    let err = serde_json::from_str::<BoundingBox>(
        r#"{"x_min":0,"y_min":0,"x_max":10,"y_max":10,"probability":[]}"#,
    )
    .unwrap_err();
    assert!(err
        .to_string()
        .contains("'probability' cannot be converted to f64"));
}

#[test]
fn decode_rejects_missing_and_unknown_fields() {
    assert!(serde_json::from_value::<BoundingBox>(json!({
        "x_min": 0,
        "y_min": 0,
        "x_max": 10,
        "probability": 0.5,
    }))
    .is_err());

    assert!(serde_json::from_value::<BoundingBox>(json!({
        "x_min": 0,
        "y_min": 0,
        "x_max": 10,
        "y_max": 10,
        "probability": 0.5,
        "label": "cat",
    }))
    .is_err());
}
