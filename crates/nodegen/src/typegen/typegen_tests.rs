use super::*;
use serde_json::json;

fn field(value: serde_json::Value) -> InputField {
    serde_json::from_value(value).expect("field should deserialize")
}

fn func(value: serde_json::Value) -> FunctionConfig {
    serde_json::from_value(value).expect("function should deserialize")
}

#[test]
fn test_primitive_mappings() {
    assert_eq!(input_type(&InputKind::String), "string");
    assert_eq!(input_type(&InputKind::Number), "number");
    assert_eq!(input_type(&InputKind::Boolean), "boolean");
    // Confidentiality is not a type-level property.
    assert_eq!(input_type(&InputKind::Secret), "string");
}

#[test]
fn test_primitive_mapping_ignores_name_and_required() {
    let required = field(json!({ "name": "a", "type": "number", "required": true }));
    let optional = field(json!({ "name": "whatever", "type": "number" }));
    assert_eq!(input_type(&required.kind), input_type(&optional.kind));
}

#[test]
fn test_select_single_vs_multiple() {
    assert_eq!(input_type(&InputKind::Select { multiple: false }), "string");
    assert_eq!(input_type(&InputKind::Select { multiple: true }), "string[]");
}

#[test]
fn test_array_of_primitive_tag_passes_through() {
    let kind = InputKind::Array {
        items_type: ArrayItems::Primitive("number".to_string()),
    };
    assert_eq!(input_type(&kind), "number[]");
}

#[test]
fn test_array_of_object_inlines_literal() {
    let f = field(json!({
        "name": "rows",
        "type": "array",
        "itemsType": {
            "type": "object",
            "fields": [
                { "name": "key", "type": "string", "required": true },
                { "name": "label", "type": "string" }
            ]
        }
    }));

    assert_eq!(
        input_type(&f.kind),
        "{\n  key: string;\n  label?: string;\n}[]"
    );
}

#[test]
fn test_array_of_non_object_schema_degrades_to_any() {
    let kind = InputKind::Array {
        items_type: ArrayItems::Schema(Box::new(InputKind::Select { multiple: true })),
    };
    assert_eq!(input_type(&kind), "any[]");
}

#[test]
fn test_object_literal_field_count_order_and_markers() {
    let f = field(json!({
        "name": "options",
        "type": "object",
        "fields": [
            { "name": "host", "type": "string", "required": true },
            { "name": "port", "type": "number" },
            { "name": "tls", "type": "boolean", "required": false }
        ]
    }));

    let projected = input_type(&f.kind);
    assert_eq!(
        projected,
        "{\n  host: string;\n  port?: number;\n  tls?: boolean;\n}"
    );
    assert_eq!(projected.matches(';').count(), 3);
}

#[test]
fn test_object_with_no_fields_is_empty_literal() {
    let f = field(json!({ "name": "opts", "type": "object", "fields": [] }));
    assert_eq!(input_type(&f.kind), "{\n\n}");
}

#[test]
fn test_deeply_nested_object_in_array_in_object() {
    let f = field(json!({
        "name": "matrix",
        "type": "object",
        "fields": [{
            "name": "rows",
            "type": "array",
            "required": true,
            "itemsType": {
                "type": "object",
                "fields": [
                    { "name": "cells", "type": "array", "itemsType": "number", "required": true }
                ]
            }
        }]
    }));

    assert_eq!(
        input_type(&f.kind),
        "{\n  rows: {\n  cells: number[];\n}[];\n}"
    );
}

#[test]
fn test_unknown_kind_maps_to_any() {
    let f = field(json!({ "name": "when", "type": "datetime" }));
    assert_eq!(input_type(&f.kind), "any");
}

#[test]
fn test_capitalize_only_first_char() {
    assert_eq!(capitalize("getUser"), "GetUser");
    assert_eq!(capitalize("ping"), "Ping");
    assert_eq!(capitalize("fetch_data"), "Fetch_data");
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_function_interface_with_inputs() {
    let f = func(json!({
        "name": "getUser",
        "inputs": [
            { "name": "id", "type": "string", "required": true },
            { "name": "verbose", "type": "boolean" }
        ]
    }));

    assert_eq!(
        function_interface(&f),
        "export interface GetUserInput {\n  id: string;\n  verbose?: boolean;\n}"
    );
}

#[test]
fn test_function_interface_without_inputs_has_placeholder() {
    let f = func(json!({ "name": "ping" }));
    assert_eq!(
        function_interface(&f),
        "export interface PingInput {\n  // This function takes no inputs\n}"
    );
}

#[test]
fn test_base_functions_interface() {
    let functions = vec![func(json!({ "name": "ping" })), func(json!({ "name": "getUser" }))];

    assert_eq!(
        base_functions_interface(&functions),
        "export interface BaseFunctions {\n  \
         ping(input: PingInput): Promise<Record<string, any>>;\n  \
         getUser(input: GetUserInput): Promise<Record<string, any>>;\n}"
    );
}

#[test]
fn test_render_module_layout() {
    let config: NodeConfig = serde_json::from_value(json!({
        "functions": [
            { "name": "ping" },
            {
                "name": "search",
                "inputs": [
                    { "name": "count", "type": "number", "required": true },
                    { "name": "tag", "type": "select", "multiple": true, "required": false }
                ]
            }
        ]
    }))
    .unwrap();

    let rendered = render_module(&config, "2024-01-01T00:00:00.000Z");

    assert!(rendered.starts_with(
        "// Generated file - DO NOT EDIT\n// Generated on: 2024-01-01T00:00:00.000Z\n\n"
    ));
    assert!(rendered.contains("export interface PingInput {"));
    assert!(rendered.contains("  count: number;\n  tag?: string[];"));
    assert!(rendered.contains("export interface BaseFunctions {"));
    assert!(rendered.ends_with("}\n"));

    // Interfaces appear in input order, umbrella last.
    let ping = rendered.find("PingInput").unwrap();
    let search = rendered.find("SearchInput").unwrap();
    let base = rendered.find("BaseFunctions").unwrap();
    assert!(ping < search && search < base);
}

#[test]
fn test_render_module_is_deterministic_apart_from_timestamp() {
    let config: NodeConfig = serde_json::from_value(json!({
        "functions": [{ "name": "ping" }]
    }))
    .unwrap();

    let first = render_module(&config, "2024-01-01T00:00:00.000Z");
    let second = render_module(&config, "2025-06-30T12:34:56.789Z");

    let strip = |s: &str| -> String {
        s.lines()
            .filter(|line| !line.starts_with("// Generated on:"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_ne!(first, second);
    assert_eq!(strip(&first), strip(&second));
}
