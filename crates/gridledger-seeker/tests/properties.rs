//! Property-based tests for the query pipeline using proptest.

use gridledger_seeker::{paginate, Engine, FacetSelector, KindConfig, Record, SearchQuery, Value};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Device {
    id: String,
    name: String,
    zone: String,
    status: String,
}

impl Record for Device {
    const KIND: &'static str = "device";
    const FIELDS: &'static [&'static str] = &["id", "name", "zone", "status"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Text(&self.id),
            "name" => Value::Text(&self.name),
            "zone" => Value::Text(&self.zone),
            "status" => Value::Text(&self.status),
            _ => Value::Missing,
        }
    }
}

const CONFIG: &str = r#"
kind: device
searchable: [id, name]
facet:
  field: zone
  values: [north, south, east]
classifier:
  field: status
  states:
    - { label: Online, tier: 0 }
    - { label: Maintenance, tier: 1 }
    - { label: Offline, tier: 2 }
"#;

fn engine() -> Engine<Device> {
    let config = KindConfig::from_yaml(CONFIG).expect("test config parses");
    Engine::new(&config).expect("test config is valid")
}

fn device_strategy() -> impl Strategy<Value = (String, String, String)> {
    (
        "[a-dA-D ]{0,8}",
        prop::sample::select(vec!["North", "SOUTH", "east", "West"]),
        prop::sample::select(vec!["Online", "Maintenance", "Offline", "Retired"]),
    )
        .prop_map(|(name, zone, status)| (name, zone.to_string(), status.to_string()))
}

fn devices_strategy() -> impl Strategy<Value = Vec<Device>> {
    prop::collection::vec(device_strategy(), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, zone, status))| Device {
                id: format!("DEV{i:03}"),
                name,
                zone,
                status,
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    "[a-dA-D0-9 ]{0,3}"
}

fn facet_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["all", "north", "South", "EAST", "west", "nowhere"])
        .prop_map(str::to_string)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Results are a subsequence of the source, in source order.
    #[test]
    fn results_preserve_source_order(
        devices in devices_strategy(),
        text in query_strategy(),
    ) {
        let engine = engine();
        let selection = engine.query(&devices, &SearchQuery::new(&text), &FacetSelector::All);

        let mut cursor = devices.iter();
        for hit in selection.iter() {
            prop_assert!(cursor.any(|d| std::ptr::eq(d, hit)), "result out of source order");
        }
    }

    /// Search and facet compose: filtering by both equals searching, then faceting.
    #[test]
    fn stages_compose(
        devices in devices_strategy(),
        text in query_strategy(),
        facet in facet_strategy(),
    ) {
        let engine = engine();
        let facet = FacetSelector::parse(&facet);
        let search = SearchQuery::new(&text);

        let combined: Vec<Device> = engine
            .query(&devices, &search, &facet)
            .iter()
            .cloned()
            .collect();

        let searched: Vec<Device> = engine
            .query(&devices, &search, &FacetSelector::All)
            .iter()
            .cloned()
            .collect();
        let staged: Vec<Device> = engine
            .query(&searched, &SearchQuery::empty(), &facet)
            .iter()
            .cloned()
            .collect();

        prop_assert_eq!(combined, staged);
    }

    /// Running the same query twice gives element-wise identical results.
    #[test]
    fn queries_are_idempotent(
        devices in devices_strategy(),
        text in query_strategy(),
        facet in facet_strategy(),
    ) {
        let engine = engine();
        let facet = FacetSelector::parse(&facet);
        let search = SearchQuery::new(&text);

        let selection = engine.query(&devices, &search, &facet);
        let first = selection.to_vec();
        let again = selection.to_vec();
        let fresh = engine.query(&devices, &search, &facet).to_vec();

        prop_assert_eq!(&first, &again);
        prop_assert_eq!(&first, &fresh);
    }

    /// Undeclared facet values select nothing.
    #[test]
    fn undeclared_facet_selects_nothing(devices in devices_strategy()) {
        let engine = engine();
        let west = FacetSelector::parse("west");
        let selection = engine.query(&devices, &SearchQuery::empty(), &west);
        prop_assert!(selection.is_empty());
    }

    /// Classification is deterministic and independent of the query.
    #[test]
    fn classification_is_deterministic(
        devices in devices_strategy(),
        text in query_strategy(),
    ) {
        let engine = engine();
        let selection = engine.query(&devices, &SearchQuery::new(&text), &FacetSelector::All);
        for annotated in selection.annotate() {
            prop_assert_eq!(&annotated.classification, &engine.classify(annotated.record));
            let declared = annotated.record.status != "Retired";
            prop_assert_eq!(annotated.classification.is_classified(), declared);
        }
    }

    /// Concatenating every page reproduces the selection exactly.
    #[test]
    fn pages_cover_selection(
        devices in devices_strategy(),
        text in query_strategy(),
        size in 1i64..7,
    ) {
        let engine = engine();
        let selection = engine.query(&devices, &SearchQuery::new(&text), &FacetSelector::All);
        let all = selection.to_vec();

        let first = selection.page(0, size).unwrap();
        prop_assert_eq!(first.total_count, all.len());

        let mut joined = Vec::new();
        for index in 0..first.page_count() {
            let page = selection.page(index as i64, size).unwrap();
            prop_assert_eq!(page.total_count, all.len());
            joined.extend(page.items.iter().map(|item| item.record));
        }
        prop_assert_eq!(joined, all);
    }

    /// Pages past the end are empty but keep the total.
    #[test]
    fn out_of_range_pages_are_empty(
        items in prop::collection::vec(any::<u16>(), 0..30),
        size in 1i64..10,
        extra in 0i64..5,
    ) {
        let total = items.len() as i64;
        let index = (total + size - 1) / size + extra;
        let page = paginate(items.iter(), index, size).unwrap();
        prop_assert!(page.is_empty());
        prop_assert_eq!(page.total_count, items.len());
    }
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn empty_collection_is_well_defined() {
    let engine = engine();
    let devices: Vec<Device> = Vec::new();
    let selection = engine.query(&devices, &SearchQuery::new("x"), &FacetSelector::parse("north"));
    assert!(selection.is_empty());
    assert_eq!(selection.count(), 0);

    let page = selection.page(0, 10).unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total_count, 0);
}

#[test]
fn bad_page_input_is_rejected_before_paging() {
    let engine = engine();
    let devices = vec![Device {
        id: "DEV000".into(),
        name: "alpha".into(),
        zone: "North".into(),
        status: "Online".into(),
    }];
    let selection = engine.query(&devices, &SearchQuery::empty(), &FacetSelector::All);
    assert!(selection.page(0, 0).is_err());
    assert!(selection.page(-1, 5).is_err());
}
