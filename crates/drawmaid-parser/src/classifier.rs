//! Statement classifier.
//!
//! Each normalized statement is matched against an ordered list of `winnow`
//! parsers; the first parser that consumes the whole statement decides what
//! it is:
//!
//! 1. Labeled arrow edge: `A -- text --> B`
//! 2. Labeled line edge: `A --- text --- B`
//! 3. Plain arrow edge: `A --> B`
//! 4. Plain line edge: `A --- B`
//! 5. Shaped node declaration: `id[label]`, `id(label)`, `id{label}`
//! 6. Bare node reference: `id`
//!
//! Edge rules come first because every edge also starts with a node mention.
//! Edge endpoints may carry their own shape declaration (`A[Start] --> B`).

use winnow::{
    Parser as _,
    ascii::{Caseless, space0, space1},
    combinator::{alt, delimited, eof, not, opt, preceded, terminated},
    error::{ContextError, ErrMode},
    token::{literal, take_till, take_until, take_while},
};

use drawmaid_core::semantic::{EdgeStyle, Shape};

use crate::statement::{EdgeStatement, NodeRef, Statement};

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Characters that end an identifier.
const DELIMITERS: &[char] = &[
    '[', ']', '(', ')', '{', '}', '-', '>', '<', '=', '&', '|', ';', '"',
];

/// A recognized `graph`/`flowchart` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Header<'src> {
    pub keyword: &'src str,
    /// The raw direction token, if any. Validation happens in the normalizer.
    pub direction: Option<&'src str>,
}

/// Classify a trimmed statement.
///
/// Returns `None` if the statement matches none of the supported forms.
pub(crate) fn classify(statement: &str) -> Option<Statement<'_>> {
    let mut input = statement;
    alt((
        whole(labeled_arrow_edge).map(Statement::Edge),
        whole(labeled_line_edge).map(Statement::Edge),
        whole(plain_arrow_edge).map(Statement::Edge),
        whole(plain_line_edge).map(Statement::Edge),
        whole(node_declaration).map(Statement::Node),
        whole(bare_node).map(Statement::Node),
    ))
    .parse_next(&mut input)
    .ok()
}

/// Recognize a diagram header such as `graph TD` or `flowchart`.
///
/// The keyword is case-insensitive and must be followed by whitespace or the
/// end of the statement, so `graphite` is not a header.
pub(crate) fn classify_header(statement: &str) -> Option<Header<'_>> {
    let mut input = statement;
    whole(header).parse_next(&mut input).ok()
}

/// Run `parser` and require it to consume the rest of the statement.
fn whole<'src, O, P>(mut parser: P) -> impl FnMut(&mut Input<'src>) -> IResult<O>
where
    P: FnMut(&mut Input<'src>) -> IResult<O>,
{
    move |input: &mut Input<'src>| {
        let output = parser(input)?;
        end_of_statement(input)?;
        Ok(output)
    }
}

fn end_of_statement<'src>(input: &mut Input<'src>) -> IResult<()> {
    (space0, eof).void().parse_next(input)
}

fn spaces<'src>(input: &mut Input<'src>) -> IResult<()> {
    space0.void().parse_next(input)
}

fn header<'src>(input: &mut Input<'src>) -> IResult<Header<'src>> {
    let keyword = header_keyword.parse_next(input)?;
    let direction = direction_token.parse_next(input)?;
    Ok(Header { keyword, direction })
}

fn header_keyword<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    alt((literal(Caseless("flowchart")), literal(Caseless("graph")))).parse_next(input)
}

fn direction_token<'src>(input: &mut Input<'src>) -> IResult<Option<&'src str>> {
    opt(preceded(
        space1,
        take_while(1.., |c: char| !c.is_whitespace()),
    ))
    .parse_next(input)
}

fn is_identifier_char(c: char) -> bool {
    !c.is_whitespace() && !DELIMITERS.contains(&c)
}

fn identifier<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(1.., is_identifier_char).parse_next(input)
}

/// Parse `open label close` for one shape; the label is trimmed.
fn shape_label<'src>(shape: Shape) -> impl FnMut(&mut Input<'src>) -> IResult<(Shape, &'src str)> {
    let (open, close) = shape.delimiters();
    move |input: &mut Input<'src>| {
        delimited(open, take_till(0.., close), close)
            .map(|label: &'src str| (shape, label.trim()))
            .parse_next(input)
    }
}

fn shape_declaration<'src>(input: &mut Input<'src>) -> IResult<(Shape, &'src str)> {
    alt((
        shape_label(Shape::Rectangle),
        shape_label(Shape::Rounded),
        shape_label(Shape::Rhombus),
    ))
    .parse_next(input)
}

/// A node mention inside an edge: `id` or `id[label]`.
fn node_ref<'src>(input: &mut Input<'src>) -> IResult<NodeRef<'src>> {
    let id = identifier.parse_next(input)?;
    let declaration = opt(shape_declaration).parse_next(input)?;
    Ok(NodeRef { id, declaration })
}

fn node_declaration<'src>(input: &mut Input<'src>) -> IResult<NodeRef<'src>> {
    let id = identifier.parse_next(input)?;
    let (shape, label) = shape_declaration.parse_next(input)?;
    Ok(NodeRef::declared(id, shape, label))
}

fn bare_node<'src>(input: &mut Input<'src>) -> IResult<NodeRef<'src>> {
    identifier.map(NodeRef::bare).parse_next(input)
}

/// `--` followed by any number of further dashes, then `>`.
fn arrow_link<'src>(input: &mut Input<'src>) -> IResult<()> {
    (take_while(2.., '-'), '>').void().parse_next(input)
}

/// Three or more dashes.
fn line_link<'src>(input: &mut Input<'src>) -> IResult<()> {
    take_while(3.., '-').void().parse_next(input)
}

/// Opening dashes of a labeled edge (`--` or longer), not part of an arrow.
fn label_opener<'src>(input: &mut Input<'src>) -> IResult<()> {
    terminated(take_while(2.., '-'), not('>'))
        .void()
        .parse_next(input)
}

/// Edge label text up to (not including) `terminator`, trimmed and non-empty.
fn edge_label<'src>(
    terminator: &'static str,
) -> impl FnMut(&mut Input<'src>) -> IResult<&'src str> {
    move |input: &mut Input<'src>| {
        take_until(1.., terminator)
            .map(str::trim)
            .verify(|label: &str| !label.is_empty())
            .parse_next(input)
    }
}

fn labeled_edge<'src>(
    input: &mut Input<'src>,
    terminator: &'static str,
    link: fn(&mut Input<'src>) -> IResult<()>,
    style: EdgeStyle,
) -> IResult<EdgeStatement<'src>> {
    let source = node_ref.parse_next(input)?;
    spaces.parse_next(input)?;
    label_opener.parse_next(input)?;
    let label = edge_label(terminator).parse_next(input)?;
    link(input)?;
    spaces.parse_next(input)?;
    let target = node_ref.parse_next(input)?;

    Ok(EdgeStatement {
        source,
        target,
        label: Some(label),
        style,
    })
}

fn plain_edge<'src>(
    input: &mut Input<'src>,
    link: fn(&mut Input<'src>) -> IResult<()>,
    style: EdgeStyle,
) -> IResult<EdgeStatement<'src>> {
    let source = node_ref.parse_next(input)?;
    spaces.parse_next(input)?;
    link(input)?;
    spaces.parse_next(input)?;
    let target = node_ref.parse_next(input)?;

    Ok(EdgeStatement {
        source,
        target,
        label: None,
        style,
    })
}

fn labeled_arrow_edge<'src>(input: &mut Input<'src>) -> IResult<EdgeStatement<'src>> {
    labeled_edge(input, "--", arrow_link, EdgeStyle::Arrow)
}

fn labeled_line_edge<'src>(input: &mut Input<'src>) -> IResult<EdgeStatement<'src>> {
    labeled_edge(input, "---", line_link, EdgeStyle::Line)
}

fn plain_arrow_edge<'src>(input: &mut Input<'src>) -> IResult<EdgeStatement<'src>> {
    plain_edge(input, arrow_link, EdgeStyle::Arrow)
}

fn plain_line_edge<'src>(input: &mut Input<'src>) -> IResult<EdgeStatement<'src>> {
    plain_edge(input, line_link, EdgeStyle::Line)
}
