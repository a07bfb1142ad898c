//! Line normalizer.
//!
//! Splits raw flowchart text into trimmed statements. The text is split on
//! `;` first and then on line breaks; blank chunks and `%%` comments are
//! dropped. A leading `graph`/`flowchart` statement is taken as the header.

use log::debug;

use drawmaid_core::semantic::Direction;

use crate::{
    classifier,
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    span::{Span, Spanned},
};

/// Statements ready for classification plus the header direction.
#[derive(Debug, Default)]
pub(crate) struct Normalized<'src> {
    pub direction: Option<Direction>,
    pub statements: Vec<Spanned<&'src str>>,
}

pub(crate) fn normalize<'src>(
    source: &'src str,
    collector: &mut DiagnosticCollector,
) -> Normalized<'src> {
    let mut normalized = Normalized::default();

    for (index, statement) in split_statements(source)
        .filter(|statement| !is_comment(statement.inner()))
        .enumerate()
    {
        let Some(header) = classifier::classify_header(statement.inner()) else {
            debug!(statement = statement.inner(); "Statement");
            normalized.statements.push(statement);
            continue;
        };

        if index > 0 {
            collector.emit(
                Diagnostic::warning(format!(
                    "`{}` header must be the first statement",
                    header.keyword
                ))
                .with_code(ErrorCode::E101)
                .with_label(statement.span(), "ignored header")
                .with_help("move the header to the top of the diagram or remove it"),
            );
            continue;
        }

        normalized.direction = header
            .direction
            .and_then(|token| parse_direction(token, statement.span(), collector));
        debug!(
            keyword = header.keyword,
            direction:? = normalized.direction;
            "Header"
        );
    }

    normalized
}

fn parse_direction(
    token: &str,
    statement: Span,
    collector: &mut DiagnosticCollector,
) -> Option<Direction> {
    match token.parse::<Direction>() {
        Ok(direction) => Some(direction),
        Err(message) => {
            // The direction token is always the tail of the trimmed header.
            let span = Span::new(statement.end() - token.len()..statement.end());
            collector.emit(
                Diagnostic::warning(message)
                    .with_code(ErrorCode::E100)
                    .with_label(span, "unknown direction")
                    .with_help("expected one of TD, TB, LR, RL or BT"),
            );
            None
        }
    }
}

fn is_comment(statement: &str) -> bool {
    statement.starts_with("%%")
}

/// Yields `(offset, piece)` for each piece of `text` split on `separator`.
fn segments(text: &str, separator: char) -> impl Iterator<Item = (usize, &str)> {
    text.split(separator).scan(0, move |offset, piece| {
        let start = *offset;
        *offset += piece.len() + separator.len_utf8();
        Some((start, piece))
    })
}

/// Splits on `;` then on line breaks, trimming each statement and dropping
/// blank ones. Spans point at the trimmed text.
fn split_statements(source: &str) -> impl Iterator<Item = Spanned<&str>> {
    segments(source, ';').flat_map(|(chunk_start, chunk)| {
        segments(chunk, '\n').filter_map(move |(line_start, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let start = chunk_start + line_start + (line.len() - line.trim_start().len());
            Some(Spanned::new(trimmed, Span::new(start..start + trimmed.len())))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> (Normalized<'_>, Vec<Diagnostic>) {
        let mut collector = DiagnosticCollector::new();
        let normalized = normalize(source, &mut collector);
        (normalized, collector.finish())
    }

    fn texts<'a>(normalized: &Normalized<'a>) -> Vec<&'a str> {
        normalized
            .statements
            .iter()
            .map(|statement| *statement.inner())
            .collect()
    }

    #[test]
    fn test_splits_on_semicolons_and_newlines() {
        let (normalized, diagnostics) = run("A; B\nC;\n\n  D  ;");

        assert_eq!(texts(&normalized), ["A", "B", "C", "D"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_spans_point_at_trimmed_text() {
        let source = "graph TD;  A --> B ;\r\n  C[Stop]\r\n";
        let (normalized, _) = run(source);

        for statement in &normalized.statements {
            assert_eq!(statement.span().slice(source), Some(*statement.inner()));
        }
        assert_eq!(texts(&normalized), ["A --> B", "C[Stop]"]);
    }

    #[test]
    fn test_drops_comments() {
        let (normalized, _) = run("%% leading comment\ngraph LR\n  %% note; A\nB");

        assert_eq!(normalized.direction, Some(Direction::LeftRight));
        assert_eq!(texts(&normalized), ["A", "B"]);
    }

    #[test]
    fn test_header_with_direction() {
        let (normalized, diagnostics) = run("flowchart BT\nA");

        assert_eq!(normalized.direction, Some(Direction::BottomTop));
        assert_eq!(texts(&normalized), ["A"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_header_without_direction() {
        let (normalized, diagnostics) = run("graph\nA --> B");

        assert_eq!(normalized.direction, None);
        assert_eq!(texts(&normalized), ["A --> B"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_no_header() {
        let (normalized, _) = run("A --> B");

        assert_eq!(normalized.direction, None);
        assert_eq!(texts(&normalized), ["A --> B"]);
    }

    #[test]
    fn test_unknown_direction_warns() {
        let source = "graph SIDEWAYS; A";
        let (normalized, diagnostics) = run(source);

        assert_eq!(normalized.direction, None);
        assert_eq!(texts(&normalized), ["A"]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E100));
        assert_eq!(diagnostics[0].labels()[0].span().slice(source), Some("SIDEWAYS"));
    }

    #[test]
    fn test_late_header_is_dropped() {
        let (normalized, diagnostics) = run("graph TD\nA\ngraph LR\nB");

        assert_eq!(normalized.direction, Some(Direction::TopDown));
        assert_eq!(texts(&normalized), ["A", "B"]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_whitespace_only_input() {
        let (normalized, diagnostics) = run("  \n\t; ;\n");

        assert!(normalized.statements.is_empty());
        assert_eq!(normalized.direction, None);
        assert!(diagnostics.is_empty());
    }
}
