use jsongrid::core::Value;
use jsongrid::{FieldDefinition, FieldType, Record, Schema, to_records, to_table};
use serde_json::json;

fn record(value: serde_json::Value) -> Record {
    value.as_object().unwrap().clone()
}

fn full_schema() -> Schema {
    Schema::new(vec![
        FieldDefinition::new("title", FieldType::String),
        FieldDefinition::new("count", FieldType::Number),
        FieldDefinition::new("active", FieldType::Boolean),
        FieldDefinition::new("tags", FieldType::List),
    ])
}

#[test]
fn round_trip_one_field_of_each_type() -> anyhow::Result<()> {
    let schema = full_schema();
    let input = record(json!({
        "title": "hello",
        "count": 3.0,
        "active": true,
        "tags": ["a", "b"],
    }));

    let table = to_table(std::slice::from_ref(&input), &schema);
    let records = to_records(&table, &schema);

    // 3.0 narrows to 3 on the way back; everything else survives exactly
    assert_eq!(records.len(), 1);
    assert_eq!(
        serde_json::Value::Object(records[0].clone()),
        json!({
            "title": "hello",
            "count": 3,
            "active": true,
            "tags": ["a", "b"],
        })
    );
    Ok(())
}

#[test]
fn list_join_and_split_are_inverse() -> anyhow::Result<()> {
    let schema = Schema::new(vec![FieldDefinition::new("tags", FieldType::List)]);
    let input = record(json!({"tags": ["a", "b", "c"]}));

    let table = to_table(std::slice::from_ref(&input), &schema);
    assert_eq!(table.cell(0, "tags"), Some(&Value::Text("a, b, c".into())));

    let records = to_records(&table, &schema);
    assert_eq!(records[0]["tags"], json!(["a", "b", "c"]));
    Ok(())
}

#[test]
fn float_values_survive_with_fraction() -> anyhow::Result<()> {
    let schema = Schema::new(vec![FieldDefinition::new("price", FieldType::Number)]);
    let input = record(json!({"price": 12.5}));

    let records = to_records(&to_table(std::slice::from_ref(&input), &schema), &schema);
    assert_eq!(records[0]["price"], json!(12.5));
    Ok(())
}

#[test]
fn missing_fields_default_on_reconstruction() -> anyhow::Result<()> {
    let schema = full_schema();
    // record carries only one of the four fields
    let input = record(json!({"title": "only"}));

    let records = to_records(&to_table(std::slice::from_ref(&input), &schema), &schema);
    assert_eq!(
        serde_json::Value::Object(records[0].clone()),
        json!({
            "title": "only",
            "count": 0,
            "active": false,
            "tags": [],
        })
    );
    Ok(())
}

#[test]
fn blank_rows_produce_no_records() -> anyhow::Result<()> {
    let schema = full_schema();
    let inputs = vec![
        record(json!({"title": "kept", "count": 1, "active": false, "tags": []})),
        record(json!({"title": "", "count": null, "active": null, "tags": null})),
    ];

    let table = to_table(&inputs, &schema);
    let records = to_records(&table, &schema);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], json!("kept"));
    Ok(())
}

#[test]
fn non_ascii_text_round_trips() -> anyhow::Result<()> {
    let schema = Schema::new(vec![FieldDefinition::new("name", FieldType::String)]);
    let input = record(json!({"name": "héllo wörld — 日本語"}));

    let records = to_records(&to_table(std::slice::from_ref(&input), &schema), &schema);
    assert_eq!(records[0]["name"], json!("héllo wörld — 日本語"));
    Ok(())
}
