use alloc::collections::{BTreeSet, VecDeque};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value as JsonValue, json};
use uuid::Uuid;

use crate::derive::{JsonEnum, Record};
use crate::info::{KeyPath, TypeInfo, Typed};
use crate::record::Schema;
use crate::registry::{HandlerError, TypeHandler, TypeRegistry};
use crate::serde::{DiagnosticKind, Diagnostics, JsonConfig, JsonError, JsonSerializer};
use crate::value::{Blob, FromValue, ToValue, Value, ValueError};

fn object(json: JsonValue) -> Map<String, JsonValue> {
    match json {
        JsonValue::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

// -----------------------------------------------------------------------------
// Fixtures

#[derive(JsonEnum, Default, Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    #[default]
    Active,
    #[record(rename = "on_hold")]
    OnHold,
    Closed,
}

#[derive(Record, Default, Debug, Clone, PartialEq)]
struct Tag {
    id: u32,
    #[record(optional)]
    label: Option<String>,
}

#[derive(Record, Default, Debug, Clone, PartialEq)]
struct Ticket {
    id: i64,
    title: String,
    status: Status,
    #[record(optional)]
    note: Option<String>,
    #[record(key = "score_value")]
    score: f64,
    tags: Vec<Tag>,
    #[record(optional)]
    owner: Option<Tag>,
    #[record(path = ["meta", "created", "at"])]
    created: DateTime<Utc>,
    #[record(path = ["meta", "trace"], optional)]
    trace: Option<Uuid>,
    #[record(skip)]
    cached: u8,
}

fn ticket() -> Ticket {
    Ticket {
        id: -12,
        title: "Printer on fire".into(),
        status: Status::OnHold,
        note: None,
        score: 2.5,
        tags: vec![
            Tag {
                id: 1,
                label: Some("hw".into()),
            },
            Tag { id: 2, label: None },
        ],
        owner: Some(Tag { id: 9, label: None }),
        created: DateTime::from_timestamp_millis(1_700_000_000_123).unwrap_or_default(),
        trace: Some(Uuid::from_u128(1)),
        cached: 0,
    }
}

// -----------------------------------------------------------------------------
// Round trip

#[test]
fn ticket_writes_expected_document() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Ticket>::new(&registry);

    let json = JsonValue::Object(serializer.serialize(&ticket()).unwrap());
    assert_eq!(
        json,
        json!({
            "id": -12,
            "title": "Printer on fire",
            "status": "on_hold",
            "note": null,
            "score_value": 2.5,
            "tags": [{"id": 1, "label": "hw"}, {"id": 2, "label": null}],
            "owner": {"id": 9, "label": null},
            "meta": {
                "created": {"at": 1_700_000_000_123_i64},
                "trace": "00000000-0000-0000-0000-000000000001"
            }
        })
    );
}

#[test]
fn ticket_round_trip() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Ticket>::new(&registry);

    let original = ticket();
    let text = serializer.to_string(&original).unwrap();
    assert_eq!(serializer.from_str(&text).unwrap(), original);

    let pretty = serializer.to_string_pretty(&original).unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(serializer.from_str(&pretty).unwrap(), original);
}

#[test]
fn skipped_field_is_not_in_schema() {
    let info = Ticket::schema();
    assert!(info.iter().all(|field| field.name() != "cached"));
    assert_eq!(info.field_len(), 9);
    assert!(info.field("score_value").is_some());
    assert!(info.field(&KeyPath::join(&["meta", "trace"])).unwrap().is_optional());
}

// -----------------------------------------------------------------------------
// Optional and required fields

#[test]
fn optional_null_reads_back_as_default() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Tag>::new(&registry);

    let tag = Tag { id: 3, label: None };
    let json = serializer.serialize(&tag).unwrap();
    assert_eq!(json["label"], JsonValue::Null);

    let mut diags = Diagnostics::new();
    assert_eq!(serializer.deserialize_with(&json, &mut diags).unwrap(), tag);
    assert_eq!(diags.len(), 1);
    let diag = diags.iter().next().unwrap();
    assert_eq!(diag.key, "label");
    assert_eq!(diag.kind, DiagnosticKind::NullValue);
}

#[test]
fn optional_absent_is_silent() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Tag>::new(&registry);

    let mut diags = Diagnostics::new();
    let tag = serializer.deserialize_with(&object(json!({"id": 4})), &mut diags).unwrap();
    assert_eq!(tag, Tag { id: 4, label: None });
    assert!(diags.is_empty());
}

#[test]
fn required_missing_names_the_key() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Ticket>::new(&registry);

    let mut json = serializer.serialize(&ticket()).unwrap();
    json.remove("score_value");

    match serializer.deserialize(&json).unwrap_err() {
        JsonError::MissingRequiredKey(key) => assert_eq!(key, "score_value"),
        other => panic!("unexpected {other}"),
    }
}

#[test]
fn required_null_keeps_default() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Tag>::new(&registry);

    let mut diags = Diagnostics::new();
    let tag = serializer
        .deserialize_with(&object(json!({"id": null})), &mut diags)
        .unwrap();
    assert_eq!(tag.id, 0);
    assert_eq!(diags.into_vec()[0].kind, DiagnosticKind::NullValue);
}

#[test]
fn required_conversion_failure_aborts() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Tag>::new(&registry);

    let err = serializer.deserialize(&object(json!({"id": "many"}))).unwrap_err();
    match &err {
        JsonError::ConversionFailure { key, source } => {
            assert_eq!(key, "id");
            assert!(matches!(**source, JsonError::Handler(HandlerError::Parse { .. })));
        }
        other => panic!("unexpected {other}"),
    }
}

#[test]
fn optional_conversion_failure_is_skipped() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Ticket>::new(&registry);

    let mut json = serializer.serialize(&ticket()).unwrap();
    json.insert("owner".into(), json!("nobody"));

    let mut diags = Diagnostics::new();
    let read = serializer.deserialize_with(&json, &mut diags).unwrap();
    assert_eq!(read.owner, None);

    let skipped: Vec<_> = diags
        .iter()
        .filter(|diag| matches!(diag.kind, DiagnosticKind::SkippedOptional { .. }))
        .collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].key, "owner");
    assert_eq!(skipped[0].record, Ticket::schema().type_path());
}

#[test]
fn setter_range_overflow_fails() {
    #[derive(Record, Default, Debug)]
    struct Small {
        value: u8,
    }

    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Small>::new(&registry);

    let err = serializer.deserialize(&object(json!({"value": 300}))).unwrap_err();
    assert!(matches!(
        err.root_cause(),
        JsonError::Value(ValueError::OutOfRange { target: "u8", .. })
    ));
}

#[test]
fn float_narrowing_is_range_checked() {
    #[derive(Record, Default, Debug)]
    struct Reading {
        small: f32,
        #[record(optional)]
        spare: f32,
    }

    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Reading>::new(&registry);

    let err = serializer.deserialize(&object(json!({"small": 1e300}))).unwrap_err();
    assert!(matches!(err, JsonError::ConversionFailure { ref key, .. } if key == "small"));
    assert!(matches!(
        err.root_cause(),
        JsonError::Value(ValueError::OutOfRange { target: "f32", .. })
    ));

    let mut diags = Diagnostics::new();
    let reading = serializer
        .deserialize_with(&object(json!({"small": 1.5, "spare": -1e300})), &mut diags)
        .unwrap();
    assert_eq!(reading.small, 1.5);
    assert_eq!(reading.spare, 0.0);
    assert_eq!(diags.len(), 1);
}

#[test]
fn integral_floats_fill_unsigned_fields() {
    #[derive(Record, Default, Debug)]
    struct Counter {
        big: u64,
    }

    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Counter>::new(&registry);

    let counter = serializer.deserialize(&object(json!({"big": 1e19}))).unwrap();
    assert_eq!(counter.big, 10_000_000_000_000_000_000);

    let err = serializer.deserialize(&object(json!({"big": -1e19}))).unwrap_err();
    assert!(matches!(err.root_cause(), JsonError::Handler(HandlerError::Parse { .. })));
}

#[test]
fn unknown_enum_variant_fails() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Ticket>::new(&registry);

    let mut json = serializer.serialize(&ticket()).unwrap();
    json.insert("status".into(), json!("Reopened"));

    let err = serializer.deserialize(&json).unwrap_err();
    assert!(matches!(err, JsonError::ConversionFailure { ref key, .. } if key == "status"));
    assert!(matches!(
        err.root_cause(),
        JsonError::Value(ValueError::UnknownVariant { variant, .. }) if variant == "Reopened"
    ));
}

#[test]
fn deserialize_into_keeps_earlier_fields() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Tag>::new(&registry);

    let mut tag = Tag {
        id: 1,
        label: Some("old".into()),
    };
    let json = object(json!({"label": "new"}));
    let err = serializer
        .deserialize_into(&mut tag, &json, &mut Diagnostics::new())
        .unwrap_err();

    assert!(matches!(err, JsonError::MissingRequiredKey(_)));
    assert_eq!(tag.id, 1);

    let json = object(json!({"id": 5, "label": "new"}));
    serializer
        .deserialize_into(&mut tag, &json, &mut Diagnostics::new())
        .unwrap();
    assert_eq!(tag.label.as_deref(), Some("new"));
}

// -----------------------------------------------------------------------------
// Nested keys

#[derive(Record, Default, Debug, PartialEq)]
struct Deep {
    #[record(path = ["a", "b", "c"])]
    required: i32,
}

#[derive(Record, Default, Debug, PartialEq)]
struct DeepOptional {
    #[record(path = ["a", "b", "c"], optional)]
    value: i32,
}

#[test]
fn nested_key_round_trip() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Deep>::new(&registry);

    let json = serializer.serialize(&Deep { required: 7 }).unwrap();
    assert_eq!(JsonValue::Object(json.clone()), json!({"a": {"b": {"c": 7}}}));
    assert_eq!(serializer.deserialize(&json).unwrap(), Deep { required: 7 });
}

#[test]
fn nested_key_missing_intermediate() {
    let registry = TypeRegistry::new();
    let input = object(json!({"a": {"x": 1}}));

    let err = JsonSerializer::<Deep>::new(&registry)
        .deserialize(&input)
        .unwrap_err();
    match err {
        JsonError::MissingRequiredKey(key) => assert_eq!(key, KeyPath::join(&["a", "b", "c"])),
        other => panic!("unexpected {other}"),
    }

    let read = JsonSerializer::<DeepOptional>::new(&registry)
        .deserialize(&input)
        .unwrap();
    assert_eq!(read, DeepOptional::default());

    let read = JsonSerializer::<DeepOptional>::new(&registry)
        .deserialize(&object(json!({"a": null})))
        .unwrap();
    assert_eq!(read, DeepOptional::default());
}

#[test]
fn nested_key_non_object_intermediate() {
    let registry = TypeRegistry::new();

    let err = JsonSerializer::<Deep>::new(&registry)
        .deserialize(&object(json!({"a": {"b": 3}})))
        .unwrap_err();
    assert!(matches!(err.root_cause(), JsonError::UnexpectedJson { found: "number", .. }));

    let mut diags = Diagnostics::new();
    let read = JsonSerializer::<DeepOptional>::new(&registry)
        .deserialize_with(&object(json!({"a": {"b": 3}})), &mut diags)
        .unwrap();
    assert_eq!(read, DeepOptional::default());
    assert_eq!(diags.len(), 1);
}

#[test]
fn nested_keys_share_objects() {
    #[derive(Record, Default, Debug, PartialEq)]
    struct Address {
        #[record(path = ["address", "city"])]
        city: String,
        #[record(path = ["address", "zip"])]
        zip: String,
        name: String,
    }

    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Address>::new(&registry);
    let address = Address {
        city: "Oslo".into(),
        zip: "0150".into(),
        name: "HQ".into(),
    };

    let text = serializer.to_string(&address).unwrap();
    assert_eq!(text, r#"{"address":{"city":"Oslo","zip":"0150"},"name":"HQ"}"#);
    assert_eq!(serializer.from_str(&text).unwrap(), address);
}

// -----------------------------------------------------------------------------
// Batches

#[test]
fn batch_preserves_order() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Tag>::new(&registry);
    let tags: Vec<Tag> = (0..5).map(|id| Tag { id, label: None }).collect();

    let json = serializer.serialize_all(&tags).unwrap();
    let ids: Vec<_> = json.iter().map(|tag| tag["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, [0, 1, 2, 3, 4]);

    assert_eq!(serializer.deserialize_all(&json).unwrap(), tags);
}

#[test]
fn batch_array_of_records() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Tag>::new(&registry);

    let tags = serializer.from_str_all(r#"[{"id":1},{"id":2}]"#).unwrap();
    assert_eq!(tags, [Tag { id: 1, label: None }, Tag { id: 2, label: None }]);
}

#[test]
fn batch_fails_on_first_error() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Tag>::new(&registry);

    let err = serializer
        .deserialize_all(&[json!({"id": 1}), json!(2), json!({})])
        .unwrap_err();
    assert!(matches!(err, JsonError::UnexpectedJson { expected: "an object", found: "number" }));

    let err = serializer.from_str_all(r#"{"id":1}"#).unwrap_err();
    assert!(matches!(err, JsonError::UnexpectedJson { expected: "an array", .. }));

    assert!(matches!(serializer.from_str("[1,"), Err(JsonError::Syntax(_))));
}

// -----------------------------------------------------------------------------
// Sequences

#[derive(Record, Default, Debug, PartialEq)]
struct Bag {
    numbers: Vec<i16>,
    #[record(optional)]
    queue: VecDeque<String>,
    #[record(optional)]
    set: BTreeSet<Status>,
    #[record(optional)]
    grid: Vec<Vec<u8>>,
    #[record(optional)]
    stamps: Box<[DateTime<Utc>]>,
    #[record(optional)]
    ids: Vec<Uuid>,
}

impl PartialOrd for Status {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Status {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

#[test]
fn sequences_round_trip() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Bag>::new(&registry);
    let bag = Bag {
        numbers: vec![-1, 0, 1],
        queue: VecDeque::from([String::from("a"), String::from("b")]),
        set: BTreeSet::from([Status::Closed, Status::Active]),
        grid: vec![vec![1, 2], vec![3]],
        stamps: vec![DateTime::from_timestamp_millis(5).unwrap_or_default()].into_boxed_slice(),
        ids: vec![Uuid::nil()],
    };

    let json = serializer.serialize(&bag).unwrap();
    assert_eq!(
        JsonValue::Object(json.clone()),
        json!({
            "numbers": [-1, 0, 1],
            "queue": ["a", "b"],
            "set": ["Active", "Closed"],
            "grid": [[1, 2], [3]],
            "stamps": [5],
            "ids": ["00000000-0000-0000-0000-000000000000"]
        })
    );
    assert_eq!(serializer.deserialize(&json).unwrap(), bag);
}

#[test]
fn sequence_from_string_literal() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Bag>::new(&registry);

    let bag = serializer
        .deserialize(&object(json!({"numbers": "[3, \"4\", 5]", "set": "[\"on_hold\"]"})))
        .unwrap();
    assert_eq!(bag.numbers, [3, 4, 5]);
    assert_eq!(bag.set, BTreeSet::from([Status::OnHold]));
}

#[test]
fn malformed_array_literal() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Bag>::new(&registry);

    let err = serializer
        .deserialize(&object(json!({"numbers": "[3, 4"})))
        .unwrap_err();
    match err {
        JsonError::ConversionFailure { key, source } => {
            assert_eq!(key, "numbers");
            assert!(matches!(*source, JsonError::MalformedArrayLiteral(_)));
        }
        other => panic!("unexpected {other}"),
    }

    let mut diags = Diagnostics::new();
    let bag = serializer
        .deserialize_with(&object(json!({"numbers": [], "grid": "not an array"})), &mut diags)
        .unwrap();
    assert!(bag.grid.is_empty());
    assert!(matches!(
        &diags.iter().next().unwrap().kind,
        DiagnosticKind::SkippedOptional { reason } if reason.starts_with("malformed array literal")
    ));
}

#[test]
fn sequence_elements_accept_text_forms() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Bag>::new(&registry);

    let bag = serializer
        .deserialize(&object(json!({
            "numbers": ["7", 8],
            "queue": [1, true],
            "stamps": ["1970-01-01T00:00:01Z", "2000"]
        })))
        .unwrap();
    assert_eq!(bag.numbers, [7, 8]);
    assert_eq!(bag.queue, ["1", "true"]);
    let millis: Vec<_> = bag.stamps.iter().map(DateTime::timestamp_millis).collect();
    assert_eq!(millis, [1_000, 2_000]);
}

// -----------------------------------------------------------------------------
// Handlers

/// An RGB color, written as `"#rrggbb"`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Rgb(u32);

impl Typed for Rgb {
    fn type_info() -> TypeInfo {
        TypeInfo::opaque::<Self>()
    }
}

impl ToValue for Rgb {
    fn to_value(&self) -> Value<'_> {
        Value::UInt(u64::from(self.0))
    }
}

impl FromValue for Rgb {
    fn from_value(value: Value<'static>) -> Result<Self, ValueError> {
        u32::from_value(value).map(Rgb)
    }
}

struct RgbHandler;

impl TypeHandler for RgbHandler {
    fn name(&self) -> &'static str {
        "rgb"
    }

    fn to_json(&self, _: &TypeInfo, value: &Value<'_>) -> Result<JsonValue, HandlerError> {
        match value {
            Value::UInt(rgb) => Ok(JsonValue::String(alloc::format!("#{rgb:06x}"))),
            other => Err(HandlerError::unexpected_value(self.name(), other)),
        }
    }

    fn from_json(&self, _: &TypeInfo, json: &JsonValue) -> Result<Value<'static>, HandlerError> {
        let Some(text) = json.as_str() else {
            return Err(HandlerError::unexpected_json(self.name(), "a string", json));
        };
        let hex = text.strip_prefix('#').unwrap_or(text);
        u64::from_str_radix(hex, 16)
            .map(Value::UInt)
            .map_err(|err| HandlerError::parse(self.name(), text, err))
    }
}

#[derive(Record, Default, Debug, PartialEq)]
struct Theme {
    background: Rgb,
    #[record(optional)]
    palette: Vec<Rgb>,
}

#[test]
fn unsupported_type_is_named() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Theme>::new(&registry);

    let err = serializer.serialize(&Theme::default()).unwrap_err();
    assert!(matches!(
        err.root_cause(),
        JsonError::UnsupportedType(path) if path.ends_with("Rgb")
    ));
    assert!(err.to_string().contains("background"));
}

#[test]
fn exact_type_handler() {
    let mut registry = TypeRegistry::new();
    registry.register_type::<Rgb>(RgbHandler);
    let serializer = JsonSerializer::<Theme>::new(&registry);

    let theme = Theme {
        background: Rgb(0x10_20_30),
        palette: vec![Rgb(0xff_00_00), Rgb(0x00_00_ff)],
    };
    let json = serializer.serialize(&theme).unwrap();
    assert_eq!(
        JsonValue::Object(json.clone()),
        json!({"background": "#102030", "palette": ["#ff0000", "#0000ff"]})
    );
    assert_eq!(serializer.deserialize(&json).unwrap(), theme);
}

#[test]
fn failing_handler_falls_back_to_structure() {
    // Reads comma separated text, refuses arrays.
    struct Csv;

    impl TypeHandler for Csv {
        fn name(&self) -> &'static str {
            "csv"
        }

        fn to_json(&self, _: &TypeInfo, value: &Value<'_>) -> Result<JsonValue, HandlerError> {
            let Value::Seq(items) = value else {
                return Err(HandlerError::unexpected_value(self.name(), value));
            };
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            Ok(JsonValue::String(parts.join(",")))
        }

        fn from_json(&self, _: &TypeInfo, json: &JsonValue) -> Result<Value<'static>, HandlerError> {
            let Some(text) = json.as_str() else {
                return Err(HandlerError::unexpected_json(self.name(), "a string", json));
            };
            Ok(Value::Seq(
                text.split(',')
                    .map(|part| Value::String(String::from(part).into()))
                    .collect(),
            ))
        }
    }

    #[derive(Record, Default, Debug, PartialEq)]
    struct Labels {
        names: Vec<String>,
    }

    let mut registry = TypeRegistry::new();
    registry.register_type::<Vec<String>>(Csv);
    let serializer = JsonSerializer::<Labels>::new(&registry);

    let labels = Labels {
        names: vec!["a".into(), "b".into()],
    };
    assert_eq!(serializer.to_string(&labels).unwrap(), r#"{"names":"a,b"}"#);
    assert_eq!(serializer.from_str(r#"{"names":"a,b"}"#).unwrap(), labels);
    // the handler refuses the array, the structural reading accepts it
    assert_eq!(serializer.from_str(r#"{"names":["a","b"]}"#).unwrap(), labels);
}

#[test]
fn handler_error_without_structure_is_reported() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Tag>::new(&registry);

    let err = serializer.deserialize(&object(json!({"id": [1]}))).unwrap_err();
    assert!(matches!(
        err.root_cause(),
        JsonError::Handler(HandlerError::UnexpectedJson { handler: "uint", .. })
    ));
}

// -----------------------------------------------------------------------------
// Scalars

#[test]
fn scalar_kinds_round_trip() {
    #[derive(Record, Default, Debug, PartialEq)]
    struct Scalars {
        flag: bool,
        letter: char,
        small: i8,
        big: u64,
        ratio: f32,
        blob: Blob,
        id: Uuid,
        #[record(optional)]
        when: Option<DateTime<Utc>>,
    }

    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Scalars>::new(&registry);
    let scalars = Scalars {
        flag: true,
        letter: 'λ',
        small: -128,
        big: u64::MAX,
        ratio: 0.25,
        blob: Blob(vec![0, 1, 254, 255]),
        id: Uuid::from_u128(0xdead_beef),
        when: None,
    };

    let json = serializer.serialize(&scalars).unwrap();
    assert_eq!(json["letter"], json!("λ"));
    assert_eq!(json["big"], json!(u64::MAX));
    assert_eq!(json["blob"], json!("AAH+/w=="));
    assert_eq!(serializer.deserialize(&json).unwrap(), scalars);
}

#[test]
fn non_finite_float_fails() {
    #[derive(Record, Default, Debug)]
    struct Reading {
        value: f64,
        #[record(optional)]
        extra: f64,
    }

    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Reading>::new(&registry);

    let mut diags = Diagnostics::new();
    let json = serializer
        .serialize_with(
            &Reading {
                value: 1.0,
                extra: f64::INFINITY,
            },
            &mut diags,
        )
        .unwrap();
    assert!(!json.contains_key("extra"));
    assert_eq!(diags.len(), 1);

    let err = serializer
        .serialize(&Reading {
            value: f64::NAN,
            extra: 0.0,
        })
        .unwrap_err();
    assert!(matches!(err.root_cause(), JsonError::Handler(HandlerError::NonFinite { .. })));
}

// -----------------------------------------------------------------------------
// Configuration

#[derive(Record, Default, Debug, PartialEq)]
struct Node {
    value: u8,
    #[record(optional)]
    children: Vec<Node>,
}

fn chain(depth: u8) -> Node {
    let mut node = Node::default();
    for value in 1..=depth {
        node = Node {
            value,
            children: vec![node],
        };
    }
    node
}

#[test]
fn recursive_records_round_trip() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Node>::new(&registry);

    let tree = chain(3);
    let json = serializer.serialize(&tree).unwrap();
    assert_eq!(json["children"][0]["children"][0]["value"], json!(1));
    assert_eq!(serializer.deserialize(&json).unwrap(), tree);
}

#[test]
fn depth_limit_is_enforced() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Node>::new(&registry)
        .with_config(JsonConfig::new().with_max_depth(2).with_log_diagnostics(false));

    assert!(serializer.serialize(&chain(2)).is_ok());

    // `children` is optional, but the limit is not skipped
    let err = serializer.serialize(&chain(3)).unwrap_err();
    assert!(matches!(err.root_cause(), JsonError::DepthLimitExceeded(2)));

    let json = JsonSerializer::<Node>::new(&registry).serialize(&chain(3)).unwrap();
    let err = serializer.deserialize(&json).unwrap_err();
    assert!(matches!(err.root_cause(), JsonError::DepthLimitExceeded(2)));
}

#[test]
fn diagnostics_accumulate_across_calls() {
    let registry = TypeRegistry::new();
    let serializer = JsonSerializer::<Tag>::new(&registry)
        .with_config(JsonConfig::new().with_log_diagnostics(false));

    let mut diags = Diagnostics::new();
    let input = [json!({"id": 1, "label": null}), json!({"id": 2, "label": null})];
    serializer.deserialize_all_with(&input, &mut diags).unwrap();
    assert_eq!(diags.len(), 2);

    let text: Vec<String> = diags.iter().map(ToString::to_string).collect();
    assert!(text[0].ends_with("null value for field `label`"));
}
