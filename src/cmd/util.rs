use serde::Serialize;
use serde_json::Value;

use dynvisit::geometry::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use dynvisit::visit::{Result, Visited};

/// Print `payload` as pretty JSON on stdout.
pub fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

type Encoder = fn(Visited<'_>) -> Option<serde_json::Result<Value>>;

const LEAF_ENCODERS: [Encoder; 6] = [
	encode::<Point>,
	encode::<LineString>,
	encode::<Polygon>,
	encode::<MultiPoint>,
	encode::<MultiLineString>,
	encode::<MultiPolygon>,
];

fn encode<T: Serialize + 'static>(item: Visited<'_>) -> Option<serde_json::Result<Value>> {
	item.downcast_ref::<T>().map(serde_json::to_value)
}

/// JSON form of a visited geometry primitive, `null` for anything else.
pub fn leaf_value(item: Visited<'_>) -> Result<Value> {
	let value = LEAF_ENCODERS.iter().find_map(|encode| encode(item)).transpose()?;
	Ok(value.unwrap_or(Value::Null))
}

/// One-line human summary of a visited geometry primitive.
pub fn leaf_summary(item: Visited<'_>) -> String {
	if let Some(point) = item.downcast_ref::<Point>() {
		return format!("({}, {})", point.x, point.y);
	}
	if let Some(line) = item.downcast_ref::<LineString>() {
		return format!("{} points", line.len());
	}
	if let Some(polygon) = item.downcast_ref::<Polygon>() {
		return format!("{} exterior points, {} holes", polygon.exterior.len(), polygon.interiors.len());
	}
	String::new()
}
