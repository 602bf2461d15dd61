use std::fmt::{self, Write};

use super::AstNode;

enum Line<'a> {
    Node(&'a AstNode, usize),
    Close(usize),
}

/// Writes an indented, one node per line view of the tree (two spaces per level)
pub fn write_tree<W: Write>(out: &mut W, nodes: &[AstNode], depth: usize) -> fmt::Result {
    let mut lines: Vec<Line> = nodes.iter().rev().map(|node| Line::Node(node, depth)).collect();

    while let Some(line) = lines.pop() {
        let (node, depth) = match line {
            Line::Node(node, depth) => (node, depth),
            Line::Close(depth) => {
                writeln!(out, "{}}}", "  ".repeat(depth))?;
                continue;
            }
        };

        let indent = "  ".repeat(depth);
        match node {
            AstNode::NumericLiteral(digit) => writeln!(out, "{indent}{digit}")?,
            AstNode::CharacterLiteral(c) => writeln!(out, "{indent}{c}")?,
            AstNode::PointerIncrement => writeln!(out, "{indent}IncrementPointer")?,
            AstNode::PointerDecrement => writeln!(out, "{indent}DecrementPointer")?,
            AstNode::ValueIncrement => writeln!(out, "{indent}IncrementValue")?,
            AstNode::ValueDecrement => writeln!(out, "{indent}DecrementValue")?,
            AstNode::Output => writeln!(out, "{indent}Output")?,
            AstNode::Input => writeln!(out, "{indent}Input")?,
            AstNode::Return => writeln!(out, "{indent}Return")?,
            AstNode::Loop(children) => {
                writeln!(out, "{indent}Loop {{")?;
                lines.push(Line::Close(depth));
                lines.extend(children.iter().rev().map(|child| Line::Node(child, depth + 1)));
            }
        }
    }
    Ok(())
}

pub fn print_tree(nodes: &[AstNode]) -> String {
    let mut out = String::new();
    // writing into a String can't fail
    let _ = write_tree(&mut out, nodes, 0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_nested_loops_indented() {
        let tree = vec![
            AstNode::ValueIncrement,
            AstNode::Loop(vec![
                AstNode::Output,
                AstNode::Loop(vec![AstNode::PointerDecrement]),
            ]),
            AstNode::NumericLiteral(3),
            AstNode::CharacterLiteral('q'),
        ];

        assert_eq!(
            print_tree(&tree),
            "IncrementValue\nLoop {\n  Output\n  Loop {\n    DecrementPointer\n  }\n}\n3\nq\n"
        );
    }

    #[test]
    fn prints_deep_nesting() {
        let mut node = AstNode::Input;
        for _ in 0..2_000 {
            node = AstNode::Loop(vec![node]);
        }
        let printed = print_tree(std::slice::from_ref(&node));
        assert_eq!(printed.matches("Loop {").count(), 2_000);
        assert!(printed.starts_with("Loop {\n  Loop {\n"));
        assert!(printed.ends_with("  }\n}\n"));
    }

    #[test]
    fn empty_tree_prints_nothing() {
        assert_eq!(print_tree(&[]), "");
    }
}
