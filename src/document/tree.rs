//! Tree navigation for rich text documents.
//!
//! This module provides the [`Document`] type: an ordered sequence of block
//! nodes addressed by paths. A path is a sequence of child indices from the
//! root, so `[1, 0]` names the first child of the second top-level block.
//! Path addressing is what lets the command layer and the selection model
//! talk about nodes without holding references into the tree.
//!
//! # Example
//!
//! ```
//! use htmlquill::document::node::{Block, Node};
//! use htmlquill::document::tree::Document;
//!
//! let doc = Document::new(vec![Node::Block(Block::paragraph("Hello world"))]);
//!
//! // Navigate to the paragraph, then to its text leaf
//! let para = doc.get_node(&[0]).unwrap();
//! assert!(para.is_block());
//!
//! let leaf = doc.get_node(&[0, 0]).unwrap();
//! assert_eq!(leaf.as_text().unwrap().text, "Hello world");
//!
//! // Out-of-bounds paths resolve to None
//! assert!(doc.get_node(&[0, 5]).is_none());
//! ```

use super::node::{Block, Node};
use anyhow::{anyhow, Result};

/// A complete rich text document: an ordered sequence of top-level blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    children: Vec<Node>,
}

impl Document {
    /// Creates a document from its top-level nodes.
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Creates a document with no blocks at all.
    ///
    /// # Example
    ///
    /// ```
    /// use htmlquill::document::tree::Document;
    ///
    /// let doc = Document::empty();
    /// assert!(doc.is_empty());
    /// ```
    pub fn empty() -> Self {
        Self { children: vec![] }
    }

    /// Returns the top-level nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the top-level nodes mutably.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Returns true if the document has no top-level nodes.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Gets an immutable reference to the node at the given path.
    ///
    /// Returns `None` if the path is out of bounds at any level or attempts
    /// to traverse through a text leaf.
    ///
    /// # Example
    ///
    /// ```
    /// use htmlquill::document::node::{Block, BlockKind, Node, TextRun};
    /// use htmlquill::document::tree::Document;
    ///
    /// let mut list = Block::new(BlockKind::BulletedList);
    /// let mut item = Block::new(BlockKind::ListItem);
    /// item.children.push(Node::Text(TextRun::new("one")));
    /// list.children.push(Node::Block(item));
    ///
    /// let doc = Document::new(vec![Node::Block(list)]);
    ///
    /// // list -> item -> text
    /// let leaf = doc.get_node(&[0, 0, 0]).unwrap();
    /// assert_eq!(leaf.as_text().unwrap().text, "one");
    ///
    /// // Text leaves have no children
    /// assert!(doc.get_node(&[0, 0, 0, 0]).is_none());
    /// ```
    pub fn get_node(&self, path: &[usize]) -> Option<&Node> {
        let (&first, rest) = path.split_first()?;
        let mut current = self.children.get(first)?;

        for &index in rest {
            current = match current {
                Node::Block(block) => block.children.get(index)?,
                Node::Text(_) => return None,
            };
        }

        Some(current)
    }

    /// Gets a mutable reference to the node at the given path.
    ///
    /// Follows the same path resolution rules as [`Document::get_node`].
    pub fn get_node_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let (&first, rest) = path.split_first()?;
        let mut current = self.children.get_mut(first)?;

        for &index in rest {
            current = match current {
                Node::Block(block) => block.children.get_mut(index)?,
                Node::Text(_) => return None,
            };
        }

        Some(current)
    }

    /// Gets the block at the given path, if the path names a block node.
    pub fn get_block(&self, path: &[usize]) -> Option<&Block> {
        self.get_node(path).and_then(Node::as_block)
    }

    /// Removes and returns the node at the given path.
    ///
    /// Returns an error if the path is empty or does not resolve.
    pub fn remove_node(&mut self, path: &[usize]) -> Result<Node> {
        let (parent_path, index) = split_parent(path)?;

        let siblings = self.siblings_mut(parent_path)?;
        if index >= siblings.len() {
            return Err(anyhow!(
                "Index {} out of bounds for node with {} children",
                index,
                siblings.len()
            ));
        }
        Ok(siblings.remove(index))
    }

    /// Inserts a node so that it ends up at the given path among its
    /// siblings.
    ///
    /// Returns an error if the parent does not resolve or the index is past
    /// the end of the sibling list.
    pub fn insert_node(&mut self, path: &[usize], node: Node) -> Result<()> {
        let (parent_path, index) = split_parent(path)?;

        let siblings = self.siblings_mut(parent_path)?;
        if index > siblings.len() {
            return Err(anyhow!(
                "Index {} out of bounds for node with {} children",
                index,
                siblings.len()
            ));
        }
        siblings.insert(index, node);
        Ok(())
    }

    /// Returns the sibling list a parent path resolves to: the top-level
    /// children for the empty path, a block's children otherwise.
    fn siblings_mut(&mut self, parent_path: &[usize]) -> Result<&mut Vec<Node>> {
        if parent_path.is_empty() {
            return Ok(&mut self.children);
        }
        match self.get_node_mut(parent_path) {
            Some(Node::Block(block)) => Ok(&mut block.children),
            Some(Node::Text(_)) => Err(anyhow!("Parent is a text leaf")),
            None => Err(anyhow!("Parent node not found")),
        }
    }

    /// Returns the paths of every block node in pre-order: containers before
    /// their items.
    pub fn block_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = Vec::new();
        collect_block_paths(&self.children, &mut Vec::new(), &mut paths);
        paths
    }

    /// Returns the paths of every text leaf in document order.
    pub fn text_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = Vec::new();
        collect_text_paths(&self.children, &mut Vec::new(), &mut paths);
        paths
    }
}

fn collect_block_paths(nodes: &[Node], prefix: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    for (index, node) in nodes.iter().enumerate() {
        if let Node::Block(block) = node {
            prefix.push(index);
            out.push(prefix.clone());
            collect_block_paths(&block.children, prefix, out);
            prefix.pop();
        }
    }
}

fn collect_text_paths(nodes: &[Node], prefix: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    for (index, node) in nodes.iter().enumerate() {
        prefix.push(index);
        match node {
            Node::Text(_) => out.push(prefix.clone()),
            Node::Block(block) => collect_text_paths(&block.children, prefix, out),
        }
        prefix.pop();
    }
}

/// Splits a non-empty path into its parent path and final index.
fn split_parent(path: &[usize]) -> Result<(&[usize], usize)> {
    match path.split_last() {
        Some((&index, parent)) => Ok((parent, index)),
        None => Err(anyhow!("Cannot address the document root")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::{BlockKind, TextRun};

    fn list_doc() -> Document {
        let mut item_one = Block::new(BlockKind::ListItem);
        item_one.children.push(Node::Text(TextRun::new("one")));
        let mut item_two = Block::new(BlockKind::ListItem);
        item_two.children.push(Node::Text(TextRun::new("two")));

        let mut list = Block::new(BlockKind::NumberedList);
        list.children.push(Node::Block(item_one));
        list.children.push(Node::Block(item_two));

        Document::new(vec![
            Node::Block(Block::paragraph("intro")),
            Node::Block(list),
        ])
    }

    #[test]
    fn test_get_node_nested() {
        let doc = list_doc();

        let leaf = doc.get_node(&[1, 1, 0]).unwrap();
        assert_eq!(leaf.as_text().unwrap().text, "two");
    }

    #[test]
    fn test_get_node_out_of_bounds() {
        let doc = list_doc();

        assert!(doc.get_node(&[2]).is_none());
        assert!(doc.get_node(&[1, 5]).is_none());
        // Traversal through a text leaf fails
        assert!(doc.get_node(&[0, 0, 0]).is_none());
    }

    #[test]
    fn test_get_node_mut_edits_in_place() {
        let mut doc = list_doc();

        if let Some(node) = doc.get_node_mut(&[0, 0]) {
            node.as_text_mut().unwrap().text = "changed".to_string();
        }
        assert_eq!(doc.get_node(&[0, 0]).unwrap().as_text().unwrap().text, "changed");
    }

    #[test]
    fn test_remove_and_insert_node() {
        let mut doc = list_doc();

        let removed = doc.remove_node(&[1, 0]).unwrap();
        assert_eq!(removed.as_block().unwrap().plain_text(), "one");
        assert_eq!(doc.get_block(&[1]).unwrap().children.len(), 1);

        doc.insert_node(&[1, 0], removed).unwrap();
        assert_eq!(doc.get_block(&[1]).unwrap().children.len(), 2);
        assert_eq!(doc.get_block(&[1, 0]).unwrap().plain_text(), "one");
    }

    #[test]
    fn test_remove_root_is_error() {
        let mut doc = list_doc();
        assert!(doc.remove_node(&[]).is_err());
    }

    #[test]
    fn test_block_paths_preorder() {
        let doc = list_doc();
        let paths = doc.block_paths();
        assert_eq!(
            paths,
            vec![vec![0], vec![1], vec![1, 0], vec![1, 1]],
        );
    }

    #[test]
    fn test_text_paths_document_order() {
        let doc = list_doc();
        let paths = doc.text_paths();
        assert_eq!(paths, vec![vec![0, 0], vec![1, 0, 0], vec![1, 1, 0]]);
    }
}
