//! From segmented stream to the typed model.
//!
//! Both sections are a left-to-right fold carrying one piece of state: the
//! package fold carries the currently active definition value, the net fold
//! the currently active net name. Refs bind to the value that was active
//! before their own segment's clause is resolved, and a segment's trailing
//! net name only takes effect from the following segment on.

use std::collections::BTreeMap;

use crate::{raw, stream, FormatError, NetList, PinId, RefDes, Value};

const NETS_MARKER: &str = "$NETS";
const PACKAGES_MARKER: &str = "$PACKAGES";
const SCHEDULE_MARKER: &str = "$SCHEDULE";

impl Value {
    /// Resolve one `FOOTPRINT ! PART ! VALUE` definition clause.
    ///
    /// The last `!`-separated field wins; an empty trailing field defers to
    /// the one before it when the clause has all three fields. A clause with
    /// no `!` at all carries no value.
    pub(crate) fn from_clause(words: &[&str]) -> Value {
        let joined = words.join(" ");
        let fields: Vec<&str> = joined.split('!').collect();
        if fields.len() < 2 {
            return Value::NoModel;
        }
        let mut chosen = fields[fields.len() - 1].trim();
        if chosen.is_empty() && fields.len() >= 3 {
            chosen = fields[fields.len() - 2].trim();
        }
        if chosen.is_empty() {
            Value::NoModel
        } else {
            Value::Model(strip_quotes(chosen))
        }
    }
}

fn strip_quotes(text: &str) -> String {
    text.replace('\'', "")
}

impl TryFrom<&str> for NetList {
    type Error = FormatError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let text = stream::normalize(input);
        let (packages, nets) = text
            .split_once(NETS_MARKER)
            .ok_or(FormatError::MissingNetsSection)?;
        Ok(NetList {
            values: parse_packages(packages),
            connections: parse_nets(nets),
        })
    }
}

/// Fold the package section into the component value map.
fn parse_packages(input: &str) -> BTreeMap<RefDes, Value> {
    let input = match input.split_once(PACKAGES_MARKER) {
        Some((_, after)) => after,
        None => input,
    };
    let mut segments = stream::segments(input);
    // The first segment is always a bare definition clause.
    let mut active = Value::from_clause(&segments.next().unwrap_or_default());

    let mut values = BTreeMap::new();
    for words in segments {
        if words.is_empty() {
            continue;
        }
        let segment = raw::PackageSegment::from_words(words);
        for refdes in &segment.refs {
            values.insert(RefDes((*refdes).to_owned()), active.clone());
        }
        if let Some(clause) = &segment.clause {
            active = Value::from_clause(clause);
        }
    }
    values
}

/// Fold the net section into the connection map.
fn parse_nets(input: &str) -> BTreeMap<RefDes, BTreeMap<PinId, String>> {
    let input = match input.split_once(SCHEDULE_MARKER) {
        Some((before, _)) => before,
        None => input,
    };
    let segments: Vec<Vec<&str>> = stream::segments(input).collect();
    // The first segment names the first net; afterwards the last word of
    // every segment but the final one names the net for the segment after it.
    let mut active = strip_quotes(&segments[0].join(" "));

    let mut connections: BTreeMap<RefDes, BTreeMap<PinId, String>> = BTreeMap::new();
    let last = segments.len() - 1;
    for (i, words) in segments.iter().enumerate().skip(1) {
        let (pins, next) = if i < last {
            match words.split_last() {
                Some((name, pins)) => (pins, Some(strip_quotes(name))),
                // blank segment: no pins, no name, the active net stands
                None => (&[][..], None),
            }
        } else {
            (words.as_slice(), None)
        };
        for word in pins {
            if let Some((refdes, pin)) = raw::split_pin(word) {
                connections
                    .entry(RefDes(refdes.to_owned()))
                    .or_default()
                    .insert(PinId(pin.to_owned()), active.clone());
            }
        }
        if let Some(next) = next {
            active = next;
        }
    }
    connections
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(&["FP!PART!10k"], Value::Model("10k".into()))]
    #[case(&["FP", "!", "PART", "!", "'10k'"], Value::Model("10k".into()))]
    #[case(&["FP!PART!"], Value::Model("PART".into()))]
    #[case(&["FP!!"], Value::NoModel)]
    #[case(&["BARE_FOOTPRINT"], Value::NoModel)]
    #[case(&[], Value::NoModel)]
    fn clause_resolves_to_last_usable_field(#[case] words: &[&str], #[case] expected: Value) {
        assert_eq!(Value::from_clause(words), expected);
    }

    #[test]
    fn document_without_nets_marker_is_rejected() {
        let err = NetList::try_from("$PACKAGES FP!X!1k; R1").unwrap_err();
        assert!(matches!(err, FormatError::MissingNetsSection));
    }

    #[test]
    fn refs_bind_to_the_previously_active_value() {
        let doc = "FPX!PARTX!5k ; R1 R2 FPY!PARTY!2.2k ; R3 $NETS N1";
        let netlist = NetList::try_from(doc).unwrap();
        let value = |refdes: &str| netlist.values.get(&RefDes(refdes.into())).cloned();
        assert_eq!(value("R1"), Some(Value::Model("5k".into())));
        assert_eq!(value("R2"), Some(Value::Model("5k".into())));
        assert_eq!(value("R3"), Some(Value::Model("2.2k".into())));
        assert_eq!(netlist.values.len(), 3);
    }

    #[test]
    fn later_definitions_overwrite_earlier_ones() {
        let doc = "A!B!1k ; R7 ; A!B!9k ; R7 $NETS X";
        let netlist = NetList::try_from(doc).unwrap();
        assert_eq!(
            netlist.values.get(&RefDes("R7".into())),
            Some(&Value::Model("9k".into()))
        );
    }

    #[test]
    fn spaced_clause_after_refs_rolls_the_boundary_back() {
        // the `!` word leads with the delimiter, so SM_0603 is the
        // clause's footprint, not a ref
        let doc = "X!Y!1k ; R1 SM_0603 ! RES_22K ! '22k' ; R2 $NETS N";
        let netlist = NetList::try_from(doc).unwrap();
        assert_eq!(
            netlist.values.get(&RefDes("R1".into())),
            Some(&Value::Model("1k".into()))
        );
        assert_eq!(
            netlist.values.get(&RefDes("R2".into())),
            Some(&Value::Model("22k".into()))
        );
        assert!(!netlist.values.contains_key(&RefDes("SM_0603".into())));
    }

    #[test]
    fn net_names_carry_to_the_following_segment() {
        let doc = "X $NETS 'VCC'; R1.1 U1.8 'GND'; R1.2 U1-4";
        let netlist = NetList::try_from(doc).unwrap();
        let net = |refdes: &str, pin: &str| {
            netlist.connections[&RefDes(refdes.into())]
                .get(&PinId(pin.into()))
                .cloned()
        };
        assert_eq!(net("R1", "1"), Some("VCC".into()));
        assert_eq!(net("R1", "2"), Some("GND".into()));
        assert_eq!(net("U1", "8"), Some("VCC".into()));
        assert_eq!(net("U1", "4"), Some("GND".into()));
    }

    #[test]
    fn schedule_section_is_ignored() {
        let doc = "F!P!1 $NETS 'A'; R1.1 $SCHEDULE R9.9 'B'";
        let netlist = NetList::try_from(doc).unwrap();
        assert_eq!(
            netlist.connections[&RefDes("R1".into())].get(&PinId("1".into())),
            Some(&"A".to_string())
        );
        assert!(!netlist.connections.contains_key(&RefDes("R9".into())));
    }

    #[test]
    fn pin_words_without_separator_are_dropped() {
        let doc = "F!P!1 $NETS 'N1'; R1.1 NOISE";
        let netlist = NetList::try_from(doc).unwrap();
        assert_eq!(netlist.connections.len(), 1);
        assert!(netlist.connections.contains_key(&RefDes("R1".into())));
    }

    #[test]
    fn blank_net_segment_keeps_the_active_net() {
        let doc = "F!P!1 $NETS 'N1';; R1.1";
        let netlist = NetList::try_from(doc).unwrap();
        assert_eq!(
            netlist.connections[&RefDes("R1".into())].get(&PinId("1".into())),
            Some(&"N1".to_string())
        );
    }

    #[test]
    fn later_connection_overwrites_same_ref_and_pin() {
        let doc = "F!P!1 $NETS 'N1'; R1.1 'N2'; R1.1";
        let netlist = NetList::try_from(doc).unwrap();
        assert_eq!(
            netlist.connections[&RefDes("R1".into())].get(&PinId("1".into())),
            Some(&"N2".to_string())
        );
    }
}
