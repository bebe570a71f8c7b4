use std::fmt::{self, Display};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::debug;
use crate::avl_tree::AvlTree;
use crate::node::Node;




/**
 * Render the tree as a Graphviz digraph. Every node is labelled with its key
 * and, underneath, its cached height and balance factor. A missing child is
 * drawn as an invisible point so that a lone child still hangs on the correct
 * side of its parent.
 */
pub fn to_dot<K: Ord + Copy + Display>(tree: &AvlTree<K>, name: &str) -> String {
    let mut dot = String::new();
    // Writing to a String cannot fail.
    let _ = render(tree, name, &mut dot);
    dot
}




/**
 * Write the digraph for the tree into any formatter sink.
 */
pub fn render<K, W>(tree: &AvlTree<K>, name: &str, out: &mut W) -> fmt::Result
where
    K: Ord + Copy + Display,
    W: fmt::Write,
{
    let mut placeholders = 0;

    writeln!(out, "digraph \"{}\" {{", name.replace('"', "\\\""))?;

    for node in tree.breadth_first() {
        writeln!(
            out,
            "    \"{}\" [label=\"{}\", width=0.75, height=0.75, fixedsize=true];",
            node.key(),
            node_label(node))?;

        for child in [node.left(), node.right()].iter() {
            match child {
                Some(child) => {
                    writeln!(out, "    \"{}\" -> \"{}\";", node.key(), child.key())?;
                }
                None => {
                    placeholders += 1;
                    writeln!(out, "    \"nil{}\" [shape=point, style=invis];", placeholders)?;
                    writeln!(out, "    \"{}\" -> \"nil{}\" [style=invis];", node.key(), placeholders)?;
                }
            }
        }
    }
    writeln!(out, "}}")
}




/**
 * Write the rendered tree to `<dir>/<name>.dot` and return the file's path.
 */
pub fn write_dot<K: Ord + Copy + Display>(tree: &AvlTree<K>, name: &str, dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(format!("{}.dot", name));
    fs::write(&path, to_dot(tree, name))?;
    debug!("wrote {} ({} nodes)", path.display(), tree.breadth_first().count());
    Ok(path)
}




/**
 * Return the DOT label of a single node: its key over `(height,balance)`.
 */
pub fn node_label<K: Ord + Copy + Display>(node: &Node<K>) -> String {
    format!("{}\\n({},{})", node.key(), node.height(), node.balance())
}




// ============================================================================
#[cfg(test)]
mod test {

    use crate::avl_tree::AvlTree;
    use super::{node_label, render, to_dot, write_dot};

    #[test]
    fn empty_tree_renders_an_empty_digraph() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(to_dot(&tree, "empty"), "digraph \"empty\" {\n}\n");
    }

    #[test]
    fn missing_children_become_invisible_placeholders() {
        let mut tree = AvlTree::new();
        tree.insert(1);
        tree.insert(2);

        let dot = to_dot(&tree, "pair");
        assert!(dot.contains("\"1\" [label=\"1\\n(2,-1)\""));
        assert!(dot.contains("\"2\" [label=\"2\\n(1,0)\""));
        assert!(dot.contains("\"1\" -> \"nil1\" [style=invis];"));
        assert!(dot.contains("\"1\" -> \"2\";"));
        assert!(dot.contains("\"2\" -> \"nil2\" [style=invis];"));
        assert!(dot.contains("\"2\" -> \"nil3\" [style=invis];"));
        assert_eq!(dot.matches("shape=point").count(), 3);
    }

    #[test]
    fn labels_show_height_and_balance() {
        let tree: AvlTree<u32> = vec![10, 20, 30].into_iter().collect();
        assert_eq!(node_label(tree.root().unwrap()), "20\\n(2,0)");
    }

    #[test]
    fn dot_files_are_written_under_the_given_directory() {
        let dir = tempfile::tempdir().unwrap();

        let tree: AvlTree<u32> = (0..7).collect();
        let path = write_dot(&tree, "seven", dir.path()).unwrap();

        assert_eq!(path, dir.path().join("seven.dot"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), to_dot(&tree, "seven"));
    }

    #[test]
    fn render_reports_a_failing_sink() {
        struct Full;

        impl std::fmt::Write for Full {
            fn write_str(&mut self, _: &str) -> std::fmt::Result {
                Err(std::fmt::Error)
            }
        }
        let tree: AvlTree<u32> = (0..3).collect();
        assert!(render(&tree, "full", &mut Full).is_err());

        let mut dot = String::new();
        render(&tree, "three", &mut dot).unwrap();
        assert_eq!(dot, to_dot(&tree, "three"));
        assert!(dot.ends_with("}\n"));
    }
}
