use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_ast_visit::{Visit, walk};
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use std::path::Path;

use crate::error::ParseError;

/// Turns source text into the ordered list of raw import specifiers it contains.
pub trait SpecifierExtractor {
    fn extract(&self, path: &Path, source: &str) -> Result<Vec<String>, ParseError>;
}

/// Extracts `import`, `export ... from`, `require()` and `import()` specifiers with oxc.
#[derive(Debug, Clone, Copy, Default)]
pub struct OxcExtractor;

impl SpecifierExtractor for OxcExtractor {
    fn extract(&self, path: &Path, source: &str) -> Result<Vec<String>, ParseError> {
        extract_specifiers(path, source)
    }
}

pub fn extract_specifiers(path: &Path, source: &str) -> Result<Vec<String>, ParseError> {
    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        trace!("Skipping JSON file: {}", path.display());
        return Ok(Vec::new());
    }
    trace!("Parsing file for imports: {}", path.display());

    let st = source_type_for(path);
    let allocator = Allocator::default();
    let ParserReturn { program, errors, panicked, .. } =
        OxcParser::new(&allocator, source, st).parse();

    if let Some(first) = errors.first() {
        debug!("{} syntax errors in {}", errors.len(), path.display());
        return Err(ParseError { path: path.to_path_buf(), message: first.to_string() });
    }
    if panicked {
        return Err(ParseError {
            path: path.to_path_buf(),
            message: "parser gave up on this file".to_string(),
        });
    }

    let mut collector = SpecifierCollector::default();
    collector.visit_program(&program);

    debug!("Found {} import specifiers in {}", collector.specs.len(), path.display());
    Ok(collector.specs)
}

/// Records import specifiers in source order, wherever they appear.
#[derive(Default)]
struct SpecifierCollector {
    specs: Vec<String>,
}

impl<'a> Visit<'a> for SpecifierCollector {
    fn visit_import_declaration(&mut self, decl: &ImportDeclaration<'a>) {
        // import type { Foo } from 'bar'
        if decl.import_kind.is_type() {
            trace!("Skipping type-only import of '{}'", decl.source.value);
            return;
        }

        // import { type Foo } from 'bar' has no runtime edge
        let has_runtime_import = match &decl.specifiers {
            Some(specifiers) => {
                specifiers.is_empty()
                    || specifiers.iter().any(|spec| match spec {
                        ImportDeclarationSpecifier::ImportSpecifier(s) => !s.import_kind.is_type(),
                        ImportDeclarationSpecifier::ImportDefaultSpecifier(_)
                        | ImportDeclarationSpecifier::ImportNamespaceSpecifier(_) => true,
                    })
            }
            // import 'side-effect'
            None => true,
        };

        if has_runtime_import {
            trace!("Found static import: '{}'", decl.source.value);
            self.specs.push(decl.source.value.to_string());
        }
    }

    fn visit_export_all_declaration(&mut self, decl: &ExportAllDeclaration<'a>) {
        if !decl.export_kind.is_type() {
            trace!("Found re-export: '{}'", decl.source.value);
            self.specs.push(decl.source.value.to_string());
        }
    }

    fn visit_export_named_declaration(&mut self, decl: &ExportNamedDeclaration<'a>) {
        if let Some(source) = &decl.source
            && !decl.export_kind.is_type()
        {
            trace!("Found re-export: '{}'", source.value);
            self.specs.push(source.value.to_string());
        }
        // export const x = require('...')
        walk::walk_export_named_declaration(self, decl);
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if let Expression::Identifier(callee) = &call.callee
            && callee.name == "require"
            && let Some(Expression::StringLiteral(sl)) =
                call.arguments.first().and_then(|arg| arg.as_expression())
        {
            trace!("Found require() call: '{}'", sl.value);
            self.specs.push(sl.value.to_string());
        }
        walk::walk_call_expression(self, call);
    }

    fn visit_import_expression(&mut self, expr: &ImportExpression<'a>) {
        if let Expression::StringLiteral(sl) = &expr.source {
            trace!("Found dynamic import(): '{}'", sl.value);
            self.specs.push(sl.value.to_string());
        }
        walk::walk_import_expression(self, expr);
    }
}

fn source_type_for(path: &Path) -> SourceType {
    let ext = path.extension().and_then(|e| e.to_str());

    // Only .cjs/.cts are forced to CommonJS; anything else may use import/export
    SourceType::default()
        .with_jsx(matches!(ext, Some("tsx") | Some("jsx")))
        .with_typescript(matches!(ext, Some("ts") | Some("tsx") | Some("mts") | Some("cts")))
        .with_module(!matches!(ext, Some("cjs") | Some("cts")))
}
