use nodegen_schema::{ArrayItems, FunctionConfig, InputField, InputKind, NodeConfig};

/// Map an input kind to its TypeScript type string.
///
/// Pure and total: every kind projects to some type. Unrecognized kinds map
/// to `any` so configs written against a newer schema vocabulary still
/// generate, just without static typing for those fields.
pub fn input_type(kind: &InputKind) -> String {
    match kind {
        InputKind::String | InputKind::Secret => "string".to_string(),
        InputKind::Number => "number".to_string(),
        InputKind::Boolean => "boolean".to_string(),
        InputKind::Select { multiple } => {
            if *multiple {
                "string[]".to_string()
            } else {
                "string".to_string()
            }
        }
        InputKind::Array { items_type } => match items_type {
            ArrayItems::Primitive(tag) => format!("{}[]", tag),
            ArrayItems::Schema(kind) => format!("{}[]", object_literal_for(kind)),
        },
        InputKind::Object { fields } => object_literal(fields),
        InputKind::Unknown => "any".to_string(),
    }
}

/// Project a nested schema kind to an inline structural literal.
/// Only object kinds carry fields; anything else degrades to `any`.
fn object_literal_for(kind: &InputKind) -> String {
    match kind {
        InputKind::Object { fields } => object_literal(fields),
        _ => "any".to_string(),
    }
}

fn object_literal(fields: &[InputField]) -> String {
    let lines: Vec<String> = fields.iter().map(field_line).collect();
    format!("{{\n{}\n}}", lines.join("\n"))
}

/// One `  name[?]: type;` line; the optional marker appears iff the field
/// is not required.
fn field_line(field: &InputField) -> String {
    let optional = if field.required { "" } else { "?" };
    format!("  {}{}: {};", field.name, optional, input_type(&field.kind))
}

/// Uppercase the first character only; the remainder is untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Build the `<Name>Input` interface for one function.
///
/// A function with no inputs gets an explicit placeholder comment instead
/// of a bare empty body.
pub fn function_interface(func: &FunctionConfig) -> String {
    let interface_name = capitalize(&func.name);

    if func.inputs.is_empty() {
        return format!(
            "export interface {}Input {{\n  // This function takes no inputs\n}}",
            interface_name
        );
    }

    let lines: Vec<String> = func.inputs.iter().map(field_line).collect();
    format!(
        "export interface {}Input {{\n{}\n}}",
        interface_name,
        lines.join("\n")
    )
}

/// Build the umbrella interface declaring every function as an async
/// operation. Inputs are statically typed; outputs stay an open-ended
/// key/value record since the schema does not describe them.
pub fn base_functions_interface(functions: &[FunctionConfig]) -> String {
    let methods: Vec<String> = functions
        .iter()
        .map(|func| {
            format!(
                "  {}(input: {}Input): Promise<Record<string, any>>;",
                func.name,
                capitalize(&func.name)
            )
        })
        .collect();

    format!("export interface BaseFunctions {{\n{}\n}}", methods.join("\n"))
}

/// Render the full generated module: header comment, per-function
/// interfaces in input order, and the umbrella interface, separated by
/// blank lines.
pub fn render_module(config: &NodeConfig, generated_at: &str) -> String {
    let interfaces: Vec<String> = config.functions.iter().map(function_interface).collect();

    format!(
        "// Generated file - DO NOT EDIT\n// Generated on: {}\n\n{}\n\n{}\n",
        generated_at,
        interfaces.join("\n\n"),
        base_functions_interface(&config.functions),
    )
}

#[cfg(test)]
#[path = "typegen/typegen_tests.rs"]
mod typegen_tests;
