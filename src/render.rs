//! Canonical LTspice-style rendering of a parsed [`NetList`].

use crate::{DeviceClass, NetList, RefDes, Value};

/// Render the model as LTspice netlist lines.
///
/// Components are emitted in designator order and each line's nodes follow
/// the pin order defined by [`crate::PinId`]. `output_name` appears only in
/// the header comment.
pub fn render(netlist: &NetList, output_name: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(netlist.values.len() + 5);
    lines.push(format!("* LTspice Netlist: {output_name}"));
    lines.push("* Converted from Telesis format".to_owned());
    lines.push(String::new());

    for (refdes, value) in &netlist.values {
        let shown = display_value(refdes, value);
        let Some(pins) = netlist.connections.get(refdes) else {
            lines.push(format!("* {refdes} ({shown}) - No connections found"));
            continue;
        };
        let nodes = pins
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(match refdes.class() {
            DeviceClass::Subcircuit => {
                format!("X{refdes} {nodes} {}", model_name(refdes, value))
            }
            _ => format!("{refdes} {nodes} {shown}"),
        });
    }

    lines.push(String::new());
    lines.push(".end".to_owned());
    lines
}

/// A trailing `M` on a resistor means megohms; complete it to `Meg` so SPICE
/// does not read it as milli. Values already spelled `Meg` pass through, and
/// the no-model marker is never rewritten.
fn display_value(refdes: &RefDes, value: &Value) -> String {
    if let Value::Model(text) = value {
        if refdes.class() == DeviceClass::Resistor {
            let upper = text.to_uppercase();
            if upper.ends_with('M') && !upper.ends_with("MEG") {
                return format!("{text}eg");
            }
        }
    }
    value.to_string()
}

/// Subcircuit instances need a model name even when the definition clause
/// had none; fall back to one derived from the designator.
fn model_name(refdes: &RefDes, value: &Value) -> String {
    match value {
        Value::Model(model) if !model.is_empty() => model.clone(),
        _ => format!("Model_{refdes}"),
    }
}
