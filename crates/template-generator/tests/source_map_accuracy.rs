//! Tests for source map accuracy.
//!
//! These tests scan expressions out of template sources, write them into
//! generated Go code, and verify that positions in the generated code map
//! back to their original positions in the template.

use pretty_assertions::assert_eq;
use source_map::{LineIndex, Position};
use template_generator::{GenerateResult, Generator, GeneratorOptions};
use template_parser::{scan_braced, Cursor};

/// Generates a render body that writes every `{ … }` expression in `source`.
fn generate(source: &str) -> GenerateResult {
    let mut g = Generator::new(GeneratorOptions::default());
    g.write("package views\n\nfunc render() {\n");

    let mut offset = 0;
    while let Some(found) = source[offset..].find('{') {
        let mut cursor = Cursor::at(source, offset + found).unwrap();
        let expr = scan_braced(&mut cursor).unwrap().unwrap();
        g.write("\t_ = ");
        g.write_expression(&expr);
        g.write("\n");
        offset = cursor.index();
    }

    g.write("}\n");
    g.finish()
}

/// Finds `needle` in the generated code and maps it back to a source position.
fn source_of(result: &GenerateResult, needle: &str) -> Position {
    let offset = result
        .code
        .find(needle)
        .unwrap_or_else(|| panic!("'{}' not found in generated code:\n{}", needle, result.code));
    let target = LineIndex::new(&result.code)
        .position(&result.code, offset)
        .unwrap();
    result
        .source_map
        .source_position_from_target(target.line, target.col)
        .unwrap_or_else(|| panic!("no mapping for '{}' at {:?}", needle, target))
}

#[test]
fn test_generated_code() {
    let source = "<p>{ name }</p>\n<a href={ url }>{ templ.Context().Value(\"k\") }</a>";
    let result = generate(source);
    insta::assert_snapshot!(result.code, @r#"
    package views

    func render() {
    	_ = name
    	_ = url
    	_ = templ_7745c5c3_Ctx.Value("k")
    }
    "#);
}

#[test]
fn test_expression_maps_to_source_line() {
    let source = "<div>\n  <p>{ title }</p>\n\n  <span>{ count }</span>\n</div>";
    let result = generate(source);

    assert_eq!(source_of(&result, "title"), Position::new(13, 1, 7));
    assert_eq!(source_of(&result, "count"), Position::new(36, 3, 10));
}

#[test]
fn test_inner_characters_map_back() {
    let source = "<p>{ user.Email }</p>";
    let result = generate(source);

    // The `E` of `Email` sits 5 characters into the expression.
    assert_eq!(source_of(&result, "Email"), Position::new(10, 0, 10));
}

#[test]
fn test_multiline_expression_maps_each_line() {
    let source = "<ul>{ strings.Join(\n\titems,\n\t\", \",\n) }</ul>";
    let result = generate(source);

    assert_eq!(source_of(&result, "items"), Position::new(21, 1, 1));
    assert_eq!(source_of(&result, "\", \""), Position::new(29, 2, 1));

    let map = &result.source_map;
    let items_src = source_of(&result, "items");
    let target = map
        .target_position_from_source(items_src.line, items_src.col)
        .unwrap();
    assert_eq!(&result.code[target.index as usize..][..5], "items");
}

#[test]
fn test_rewritten_expression_maps_start() {
    let source = "<p>\n{ templ.Context().Value(\"theme\") }\n</p>";
    let result = generate(source);

    assert_eq!(
        source_of(&result, "templ_7745c5c3_Ctx"),
        Position::new(6, 1, 2)
    );
    // Characters after the rewrite are not mapped individually.
    let offset = result.code.find(".Value").unwrap();
    let target = LineIndex::new(&result.code)
        .position(&result.code, offset)
        .unwrap();
    assert_eq!(
        result
            .source_map
            .source_position_from_target(target.line, target.col),
        None
    );
}

#[test]
fn test_unmapped_generated_text() {
    let result = generate("<p>{ x }</p>");
    // `package views` was generated without a template counterpart.
    assert_eq!(result.source_map.source_position_from_target(0, 0), None);
    assert_eq!(result.source_map.len(), 1);
}
