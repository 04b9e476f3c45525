// SPDX-License-Identifier: MPL-2.0
//! Campaign listing returned by `GET /list-campaigns`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A previously generated image exposed through a download-capable URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub url: String,
    pub filename: String,
}

/// Campaign name to assets, in the order the server listed them.
pub type CampaignMap = IndexMap<String, Vec<Asset>>;

/// Iterates the campaigns that have at least one asset, preserving order.
pub fn non_empty_campaigns(map: &CampaignMap) -> impl Iterator<Item = (&str, &[Asset])> {
    map.iter()
        .filter(|(_, assets)| !assets.is_empty())
        .map(|(name, assets)| (name.as_str(), assets.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str) -> Asset {
        Asset {
            url: format!("https://cdn.example.com/{name}?raw=1"),
            filename: name.to_string(),
        }
    }

    #[test]
    fn deserializing_keeps_server_order() {
        let json = r#"{
            "zeta": [{"url": "https://x/z.png?raw=1", "filename": "z.png"}],
            "alpha": [],
            "mid": [{"url": "https://x/m.png?raw=1", "filename": "m.png"}]
        }"#;
        let map: CampaignMap = serde_json::from_str(json).expect("valid campaign map");
        let names: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn non_empty_campaigns_skips_empty_entries() {
        let mut map = CampaignMap::new();
        map.insert("first".into(), vec![asset("a.png"), asset("b.png")]);
        map.insert("empty".into(), Vec::new());
        map.insert("last".into(), vec![asset("c.png")]);

        let sections: Vec<(&str, usize)> = non_empty_campaigns(&map)
            .map(|(name, assets)| (name, assets.len()))
            .collect();
        assert_eq!(sections, vec![("first", 2), ("last", 1)]);
    }
}
