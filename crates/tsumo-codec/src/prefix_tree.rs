//! Minimal-redundancy prefix codes built per payload.
//!
//! A [`PrefixTree`] is built from symbol frequencies by repeatedly merging
//! the two lightest nodes. Ties are broken by the concatenated symbols of
//! each node, so the same table always yields the same tree. The first node
//! popped becomes the left child.
//!
//! Only the tree shape is serialized, pre-order, one bit per node:
//!
//! - `0`: branch, followed by the left then the right subtree
//! - `1`: leaf, followed by its symbol as 8 bits
//!
//! Walking from the root, a `0` bit selects the left child and `1` the right.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};

use smallvec::SmallVec;

use crate::bitstream::{BitReader, BitWriter};
use crate::error::CodecError;

const BRANCH: bool = false;
const LEAF: bool = true;
const LEFT: bool = false;
const RIGHT: bool = true;
const SYMBOL_BITS: u32 = 8;

/// Deepest tree a serialized shape may describe. 128 distinct ASCII
/// symbols never need more.
const MAX_DEPTH: usize = 128;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Node {
    Leaf(u8),
    Branch(Box<Node>, Box<Node>),
}

/// Priority-queue entry; ordered by frequency, then by label.
struct Pending {
    frequency: u64,
    label: String,
    node: Node,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then_with(|| self.label.cmp(&other.label))
    }
}

/// A prefix code tree over single-byte ASCII symbols.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use tsumo_codec::bitstream::{BitReader, BitWriter};
/// use tsumo_codec::PrefixTree;
///
/// let freq = BTreeMap::from([(' ', 60), ('R', 5), ('B', 3)]);
/// let tree = PrefixTree::from_frequencies(&freq).unwrap();
/// let encoding = tree.encoding();
/// assert_eq!(encoding.get(' ').unwrap().len(), 1);
///
/// let mut w = BitWriter::new();
/// tree.write_to(&mut w).unwrap();
/// encoding.write_symbol('R', &mut w).unwrap();
/// let bytes = w.finish();
///
/// let mut r = BitReader::new(&bytes);
/// let decoded = PrefixTree::read_from(&mut r).unwrap();
/// assert_eq!(decoded.symbol_from_stream(&mut r).unwrap(), 'R');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixTree {
    root: Node,
}

impl PrefixTree {
    /// Build a tree from a symbol → frequency table.
    ///
    /// A single-symbol table yields a one-leaf tree whose only code is empty.
    ///
    /// # Errors
    ///
    /// - [`CodecError::EmptyAlphabet`] for an empty table.
    /// - [`CodecError::NonAsciiSymbol`] for a symbol outside ASCII.
    pub fn from_frequencies(frequencies: &BTreeMap<char, u64>) -> Result<Self, CodecError> {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        for (&symbol, &frequency) in frequencies {
            if !symbol.is_ascii() {
                return Err(CodecError::NonAsciiSymbol { symbol });
            }
            heap.push(Reverse(Pending {
                frequency,
                label: symbol.to_string(),
                node: Node::Leaf(symbol as u8),
            }));
        }

        loop {
            let Some(Reverse(left)) = heap.pop() else {
                return Err(CodecError::EmptyAlphabet);
            };
            let Some(Reverse(right)) = heap.pop() else {
                return Ok(Self { root: left.node });
            };
            heap.push(Reverse(Pending {
                frequency: left.frequency.saturating_add(right.frequency),
                label: left.label + &right.label,
                node: Node::Branch(Box::new(left.node), Box::new(right.node)),
            }));
        }
    }

    /// Serialize the tree shape.
    pub fn write_to(&self, writer: &mut BitWriter) -> Result<(), CodecError> {
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf(symbol) => {
                    writer.write_bit(LEAF);
                    writer.write(u64::from(*symbol), SYMBOL_BITS)?;
                }
                Node::Branch(left, right) => {
                    writer.write_bit(BRANCH);
                    stack.push(&**right);
                    stack.push(&**left);
                }
            }
        }
        Ok(())
    }

    /// Rebuild a tree from a shape written by [`write_to`](Self::write_to).
    ///
    /// # Errors
    ///
    /// - [`CodecError::UnexpectedEof`] on a truncated shape.
    /// - [`CodecError::MalformedTree`] if the shape nests too deep.
    /// - [`CodecError::NonAsciiSymbol`] for a leaf byte above 127.
    /// - [`CodecError::DuplicateSymbol`] if two leaves share a symbol.
    pub fn read_from(reader: &mut BitReader<'_>) -> Result<Self, CodecError> {
        let mut seen = [false; 128];
        let root = read_node(reader, &mut seen, 0)?;
        Ok(Self { root })
    }

    /// Decode one symbol, consuming one bit per branch on the path.
    pub fn symbol_from_stream(&self, reader: &mut BitReader<'_>) -> Result<char, CodecError> {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf(symbol) => return Ok(char::from(*symbol)),
                Node::Branch(left, right) => {
                    node = if reader.read_bit()? == LEFT {
                        &**left
                    } else {
                        &**right
                    };
                }
            }
        }
    }

    /// The code for every symbol in the tree.
    pub fn encoding(&self) -> Encoding {
        let mut codes = BTreeMap::new();
        let mut stack = vec![(&self.root, Code::default())];
        while let Some((node, code)) = stack.pop() {
            match node {
                Node::Leaf(symbol) => {
                    codes.insert(char::from(*symbol), code);
                }
                Node::Branch(left, right) => {
                    let mut right_code = code.clone();
                    right_code.bits.push(RIGHT);
                    let mut left_code = code;
                    left_code.bits.push(LEFT);
                    stack.push((&**right, right_code));
                    stack.push((&**left, left_code));
                }
            }
        }
        Encoding { codes }
    }

    /// Code length in bits for every symbol.
    pub fn code_lengths(&self) -> BTreeMap<char, usize> {
        self.encoding()
            .iter()
            .map(|(symbol, code)| (symbol, code.len()))
            .collect()
    }

    /// Number of leaves.
    pub fn symbol_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf(_) => count += 1,
                Node::Branch(left, right) => {
                    stack.push(&**right);
                    stack.push(&**left);
                }
            }
        }
        count
    }
}

fn read_node(
    reader: &mut BitReader<'_>,
    seen: &mut [bool; 128],
    depth: usize,
) -> Result<Node, CodecError> {
    if depth > MAX_DEPTH {
        return Err(CodecError::MalformedTree {
            detail: format!("deeper than {MAX_DEPTH} levels"),
        });
    }
    if reader.read_bit()? == BRANCH {
        let left = read_node(reader, seen, depth + 1)?;
        let right = read_node(reader, seen, depth + 1)?;
        return Ok(Node::Branch(Box::new(left), Box::new(right)));
    }
    let byte = reader.read(SYMBOL_BITS)? as u8;
    let symbol = char::from(byte);
    let slot = seen
        .get_mut(usize::from(byte))
        .ok_or(CodecError::NonAsciiSymbol { symbol })?;
    if *slot {
        return Err(CodecError::DuplicateSymbol { symbol });
    }
    *slot = true;
    Ok(Node::Leaf(byte))
}

/// A root-to-leaf path: `false` for left, `true` for right.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Code {
    bits: SmallVec<[bool; 16]>,
}

impl Code {
    /// Path length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the code is empty (single-symbol tree).
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The path bits from the root.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Write the path bits.
    pub fn write_to(&self, writer: &mut BitWriter) {
        for &bit in &self.bits {
            writer.write_bit(bit);
        }
    }
}

/// Symbol → [`Code`] table derived from a [`PrefixTree`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Encoding {
    codes: BTreeMap<char, Code>,
}

impl Encoding {
    /// The code for `symbol`, if it is in the tree.
    pub fn get(&self, symbol: char) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Write the code for `symbol`.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnknownSymbol`] if the symbol is not in the tree.
    pub fn write_symbol(&self, symbol: char, writer: &mut BitWriter) -> Result<(), CodecError> {
        let code = self.get(symbol).ok_or(CodecError::UnknownSymbol { symbol })?;
        code.write_to(writer);
        Ok(())
    }

    /// Every `(symbol, code)` pair in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c))
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
