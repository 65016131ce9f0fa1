// ── API-to-domain conversions ──
//
// Bridges raw `nicconf_api` payloads into the canonical model: interface
// names become a duplicate-free ordered sequence, and the config payload
// becomes a `ConfigDocument` regardless of which wire shape it used.

use std::collections::HashSet;

use tracing::{debug, warn};

use nicconf_api::ConfigPayload;

use crate::model::{ConfigDocument, Ifname, NicConfig};

/// Keep the first occurrence of each name, preserving order.
pub(crate) fn ifnames_from_raw(raw: Vec<String>) -> Vec<Ifname> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut ifnames = Vec::with_capacity(raw.len());

    for name in raw {
        if seen.insert(name.clone()) {
            ifnames.push(Ifname::from(name));
        } else {
            warn!(ifname = %name, "duplicate interface name in /ifnames, keeping first");
        }
    }

    ifnames
}

/// Build a document from the `/config` payload.
///
/// `null` entries mean "nothing stored" and are dropped so the interface
/// falls back to the empty configuration like any other unconfigured one.
pub(crate) fn document_from_payload(payload: ConfigPayload) -> ConfigDocument {
    payload
        .into_nics()
        .into_iter()
        .filter_map(|(name, value)| {
            if value.is_null() {
                debug!(ifname = %name, "dropping null configuration entry");
                None
            } else {
                Some((Ifname::from(name), NicConfig::new(value)))
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn duplicates_keep_first_position() {
        let names = ifnames_from_raw(vec![
            "eth1".into(),
            "eth0".into(),
            "eth1".into(),
            "lo".into(),
        ]);
        assert_eq!(names, vec!["eth1", "eth0", "lo"]);
    }

    #[test]
    fn wrapped_and_bare_payloads_agree() {
        let wrapped: ConfigPayload =
            serde_json::from_value(json!({ "nics": { "eth0": { "dhcp": true } } })).unwrap();
        let bare: ConfigPayload =
            serde_json::from_value(json!({ "eth0": { "dhcp": true } })).unwrap();

        assert_eq!(document_from_payload(wrapped), document_from_payload(bare));
    }

    #[test]
    fn null_entries_are_absent() {
        let payload: ConfigPayload =
            serde_json::from_value(json!({ "nics": { "eth0": null, "eth1": {} } })).unwrap();
        let doc = document_from_payload(payload);

        assert!(!doc.contains("eth0"));
        assert!(doc.contains("eth1"));
    }
}
