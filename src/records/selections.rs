//! Choice fields used by the creation flows.

crate::selection_enum! {
    /// What kind of place is being added.
    pub enum PlaceCategory {
        Cafe => "cafe",
        Restaurant => "restaurant",
        Bar => "bar",
        Museum => "museum",
        Park => "park",
        Viewpoint => "viewpoint",
        Beach => "beach",
        Other => "other",
    }
}

crate::selection_enum! {
    /// What a group meets up to do.
    pub enum GroupActivity {
        Hiking => "hiking",
        Dining => "dining",
        Nightlife => "nightlife",
        Culture => "culture",
        Sports => "sports",
        Language => "language",
        Other => "other",
    }
}

crate::selection_enum! {
    pub enum HousingType {
        Studio => "studio",
        Apartment => "apartment",
        PrivateRoom => "private_room",
        SharedRoom => "shared_room",
        House => "house",
    }
}

crate::selection_enum! {
    /// Whether a housing spot can be moved into.
    pub enum Availability {
        Available => "available",
        Soon => "soon",
        Taken => "taken",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::Selection;

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = HousingType::ALL.iter().map(|h| h.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), HousingType::ALL.len());
    }

    #[test]
    fn serde_matches_keys() {
        let json = serde_json::to_string(&HousingType::PrivateRoom).unwrap();
        assert_eq!(json, "\"private_room\"");
        let parsed: Availability = serde_json::from_str("\"soon\"").unwrap();
        assert_eq!(parsed, Availability::Soon);
    }
}
