//! # Q-ary RA code description
//!
//! This module implements [`QraCode`], the description of a Q-ary
//! Repeat-Accumulate code over GF(64). It contains the tables used by the
//! encoder (the accumulator input permutation and weights) and the tables
//! describing the factor graph used by the message passing decoder.
//!
//! The factor graph is stored as a flat arena of edges indexed by integer
//! ids. Each variable node and each factor node owns a row of a fixed-width
//! index table listing the ids of its incident edges. The first `N` factors
//! of the graph are the intrinsic factors, which have degree one and connect
//! each codeword symbol with its channel observation. The first edge of each
//! variable node is the edge to its intrinsic factor. The remaining factors
//! are the parity constraints of the accumulator, which require that the
//! weighted sum of the symbols connected to them is zero.

use crate::gf64::{Gf64, ORDER};
use num_traits::{One, Zero};
use thiserror::Error;

/// Node of the factor graph.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Node {
    /// Variable node (codeword symbol).
    Variable(usize),
    /// Factor node (intrinsic factor or parity constraint).
    Check(usize),
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Variable(v) => write!(f, "variable {v}"),
            Node::Check(c) => write!(f, "check {c}"),
        }
    }
}

/// Code description error.
///
/// These errors are returned when the tables describing a code are not
/// consistent.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The code dimensions are invalid.
    #[error("invalid code dimensions k = {k}, n = {n}")]
    InvalidDimensions {
        /// Number of information symbols.
        k: usize,
        /// Number of codeword symbols.
        n: usize,
    },
    /// A table does not have the expected length.
    #[error("table {table} has length {found} (expected {expected})")]
    TableLength {
        /// Table name.
        table: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        found: usize,
    },
    /// An accumulator input refers to a non-existing information symbol.
    #[error("accumulator input {position} refers to information symbol {index}")]
    AccumulatorIndex {
        /// Position in the accumulator input table.
        position: usize,
        /// Information symbol index.
        index: usize,
    },
    /// A weight logarithm is not smaller than 63.
    #[error("weight logarithm {wlog} at {table}[{position}] is out of range")]
    WeightOutOfRange {
        /// Table name.
        table: &'static str,
        /// Position in the table.
        position: usize,
        /// Weight logarithm.
        wlog: u8,
    },
    /// A node has a degree exceeding the allowed range.
    #[error("{node} has degree {degree} (allowed range {min}..={max})")]
    DegreeOutOfRange {
        /// Node.
        node: Node,
        /// Degree.
        degree: usize,
        /// Minimum allowed degree.
        min: usize,
        /// Maximum allowed degree.
        max: usize,
    },
    /// The sum of the variable degrees, the sum of the check degrees and the
    /// number of edges are not all equal.
    #[error(
        "sum of variable degrees ({var_sum}) and sum of check degrees ({check_sum}) \
         do not match the number of edges ({edges})"
    )]
    DegreeSumMismatch {
        /// Sum of variable node degrees.
        var_sum: usize,
        /// Sum of check node degrees.
        check_sum: usize,
        /// Number of edges.
        edges: usize,
    },
    /// A node refers to a non-existing edge.
    #[error("{node} refers to edge {edge}, but there are only {edges} edges")]
    EdgeOutOfRange {
        /// Node.
        node: Node,
        /// Edge id.
        edge: usize,
        /// Number of edges.
        edges: usize,
    },
    /// An edge is not connected to exactly one variable node and one check
    /// node.
    #[error("edge {edge} appears {count} times on the {side} side")]
    EdgeMultiplicity {
        /// Edge id.
        edge: usize,
        /// Side of the graph ("variable" or "check").
        side: &'static str,
        /// Number of times that the edge appears.
        count: usize,
    },
    /// The intrinsic factor of a variable is not laid out as expected.
    #[error("the first edge of variable {0} does not go to its intrinsic factor")]
    IntrinsicFactor(usize),
    /// The codewords produced by the accumulator do not satisfy a parity
    /// constraint of the factor graph.
    #[error("parity check {check} fails for the codeword of information symbol {symbol}")]
    ParityMismatch {
        /// Parity check factor.
        check: usize,
        /// Information symbol set to one in the failing codeword.
        symbol: usize,
    },
}

/// Raw tables describing a code.
///
/// The node-to-edge tables `var_edges` and `check_edges` are row-major with a
/// row width of `max_var_degree` and `max_check_degree` respectively. Only the
/// first `degree` entries of each row are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeTables<'a> {
    /// Number of information symbols.
    pub k: usize,
    /// Number of codeword symbols.
    pub n: usize,
    /// Information symbol feeding each accumulator step (`n - k + 1` entries).
    pub acc_input_idx: &'a [usize],
    /// Weight logarithm of each accumulator step (`n - k + 1` entries).
    pub acc_input_wlog: &'a [u8],
    /// Maximum variable node degree (including the intrinsic factor).
    pub max_var_degree: usize,
    /// Maximum check node degree.
    pub max_check_degree: usize,
    /// Degree of each variable node.
    pub var_degrees: &'a [usize],
    /// Degree of each factor node.
    pub check_degrees: &'a [usize],
    /// Edges incident to each variable node.
    pub var_edges: &'a [usize],
    /// Edges incident to each factor node.
    pub check_edges: &'a [usize],
    /// Weight logarithm of each edge.
    pub edge_weights: &'a [u8],
}

/// Q-ary RA code description.
///
/// A `QraCode` can only be obtained from consistent tables, so the encoder and
/// decoder can index it without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QraCode {
    k: usize,
    n: usize,
    acc_input_idx: Box<[usize]>,
    acc_input_wlog: Box<[u8]>,
    max_var_degree: usize,
    max_check_degree: usize,
    var_degrees: Box<[usize]>,
    check_degrees: Box<[usize]>,
    var_edges: Box<[usize]>,
    check_edges: Box<[usize]>,
    edge_weights: Box<[u8]>,
}

fn check_length(table: &'static str, len: usize, expected: usize) -> Result<(), Error> {
    if len == expected {
        Ok(())
    } else {
        Err(Error::TableLength {
            table,
            expected,
            found: len,
        })
    }
}

fn check_weights(table: &'static str, wlogs: &[u8]) -> Result<(), Error> {
    match wlogs.iter().position(|&w| usize::from(w) >= ORDER) {
        Some(position) => Err(Error::WeightOutOfRange {
            table,
            position,
            wlog: wlogs[position],
        }),
        None => Ok(()),
    }
}

fn check_accumulator(
    k: usize,
    n: usize,
    acc_input_idx: &[usize],
    acc_input_wlog: &[u8],
) -> Result<(), Error> {
    if k == 0 || k >= n {
        return Err(Error::InvalidDimensions { k, n });
    }
    check_length("acc_input_idx", acc_input_idx.len(), n - k + 1)?;
    check_length("acc_input_wlog", acc_input_wlog.len(), n - k + 1)?;
    if let Some(position) = acc_input_idx.iter().position(|&j| j >= k) {
        return Err(Error::AccumulatorIndex {
            position,
            index: acc_input_idx[position],
        });
    }
    check_weights("acc_input_wlog", acc_input_wlog)
}

impl QraCode {
    /// Creates a code description from its raw tables.
    ///
    /// # Errors
    ///
    /// All the tables are checked for consistency. An error describing the
    /// first inconsistency found is returned.
    pub fn from_tables(tables: &CodeTables) -> Result<QraCode, Error> {
        let CodeTables {
            k,
            n,
            acc_input_idx,
            acc_input_wlog,
            max_var_degree,
            max_check_degree,
            var_degrees,
            check_degrees,
            var_edges,
            check_edges,
            edge_weights,
        } = *tables;

        check_accumulator(k, n, acc_input_idx, acc_input_wlog)?;
        let num_factors = check_degrees.len();
        if num_factors < n {
            return Err(Error::TableLength {
                table: "check_degrees",
                expected: n,
                found: num_factors,
            });
        }
        check_length("var_degrees", var_degrees.len(), n)?;
        check_length("var_edges", var_edges.len(), n * max_var_degree)?;
        check_length(
            "check_edges",
            check_edges.len(),
            num_factors * max_check_degree,
        )?;
        let num_edges = edge_weights.len();
        check_weights("edge_weights", edge_weights)?;

        for (v, &degree) in var_degrees.iter().enumerate() {
            if degree < 1 || degree > max_var_degree {
                return Err(Error::DegreeOutOfRange {
                    node: Node::Variable(v),
                    degree,
                    min: 1,
                    max: max_var_degree,
                });
            }
        }
        for (c, &degree) in check_degrees.iter().enumerate() {
            // intrinsic factors have degree one, parity constraints need at
            // least two symbols
            let (min, max) = if c < n {
                (1, max_check_degree.min(1))
            } else {
                (2, max_check_degree)
            };
            if degree < min || degree > max {
                return Err(Error::DegreeOutOfRange {
                    node: Node::Check(c),
                    degree,
                    min,
                    max,
                });
            }
        }

        let var_sum = var_degrees.iter().sum::<usize>();
        let check_sum = check_degrees.iter().sum::<usize>();
        if var_sum != num_edges || check_sum != num_edges {
            return Err(Error::DegreeSumMismatch {
                var_sum,
                check_sum,
                edges: num_edges,
            });
        }

        let code = QraCode {
            k,
            n,
            acc_input_idx: acc_input_idx.into(),
            acc_input_wlog: acc_input_wlog.into(),
            max_var_degree,
            max_check_degree,
            var_degrees: var_degrees.into(),
            check_degrees: check_degrees.into(),
            var_edges: var_edges.into(),
            check_edges: check_edges.into(),
            edge_weights: edge_weights.into(),
        };
        code.check_edge_multiplicities()?;
        for v in 0..n {
            if code.check_edges(v) != [code.intrinsic_edge(v)] {
                return Err(Error::IntrinsicFactor(v));
            }
        }
        code.check_parity()?;
        Ok(code)
    }

    // The encoder and the factor graph must describe the same code. The parity
    // constraints are linear, so it is enough to check the codewords of the
    // unit messages.
    fn check_parity(&self) -> Result<(), Error> {
        let mut edge_vars = vec![0; self.num_edges()];
        for v in 0..self.num_variables() {
            for &e in self.var_edges(v) {
                edge_vars[e] = v;
            }
        }
        for symbol in 0..self.k {
            let mut codeword = vec![Gf64::zero(); self.n];
            codeword[symbol] = Gf64::one();
            let mut acc = Gf64::zero();
            let steps = self.acc_input_idx.iter().zip(self.acc_input_wlog.iter());
            for (step, (&j, &wlog)) in steps.enumerate() {
                acc += codeword[j].mul_log(wlog);
                if step > 0 {
                    codeword[self.k + step - 1] = acc;
                }
            }
            for check in self.parity_checks() {
                let mut sum = Gf64::zero();
                for &e in self.check_edges(check) {
                    sum += codeword[edge_vars[e]].mul_log(self.edge_weights[e]);
                }
                if !sum.is_zero() {
                    return Err(Error::ParityMismatch { check, symbol });
                }
            }
        }
        Ok(())
    }

    // Each edge must join exactly one variable node and one check node.
    fn check_edge_multiplicities(&self) -> Result<(), Error> {
        let num_edges = self.num_edges();
        let sides = [
            ("variable", self.num_variables()),
            ("check", self.num_factors()),
        ];
        for (side, num_nodes) in sides {
            let mut count = vec![0; num_edges];
            for node in 0..num_nodes {
                let (node, edges) = if side == "variable" {
                    (Node::Variable(node), self.var_edges(node))
                } else {
                    (Node::Check(node), self.check_edges(node))
                };
                for &edge in edges {
                    if edge >= num_edges {
                        return Err(Error::EdgeOutOfRange {
                            node,
                            edge,
                            edges: num_edges,
                        });
                    }
                    count[edge] += 1;
                }
            }
            if let Some(edge) = count.iter().position(|&c| c != 1) {
                return Err(Error::EdgeMultiplicity {
                    edge,
                    side,
                    count: count[edge],
                });
            }
        }
        Ok(())
    }

    /// Creates a code description from the accumulator tables.
    ///
    /// The accumulator is seeded with `w[0] * x[idx[0]]`, and then check
    /// symbol `j` is obtained by adding `w[j + 1] * x[idx[j + 1]]` to the
    /// accumulator. The factor graph is derived from this structure: parity
    /// constraint 0 connects `x[idx[0]]`, `x[idx[1]]` and the first check
    /// symbol, and parity constraint `j > 0` connects check symbols `j - 1`
    /// and `j` with `x[idx[j + 1]]`.
    ///
    /// # Errors
    ///
    /// An error is returned if the dimensions or the accumulator tables are
    /// invalid.
    pub fn from_accumulator(
        k: usize,
        n: usize,
        acc_input_idx: &[usize],
        acc_input_wlog: &[u8],
    ) -> Result<QraCode, Error> {
        check_accumulator(k, n, acc_input_idx, acc_input_wlog)?;
        let nc = n - k;

        // (variable, weight logarithm) for the edges of each factor
        let mut factors: Vec<Vec<(usize, u8)>> = (0..n).map(|v| vec![(v, 0)]).collect();
        factors.push(vec![
            (acc_input_idx[0], acc_input_wlog[0]),
            (acc_input_idx[1], acc_input_wlog[1]),
            (k, 0),
        ]);
        for j in 1..nc {
            factors.push(vec![
                (k + j - 1, 0),
                (acc_input_idx[j + 1], acc_input_wlog[j + 1]),
                (k + j, 0),
            ]);
        }

        let mut var_lists = vec![Vec::new(); n];
        let mut check_lists = Vec::with_capacity(factors.len());
        let mut edge_weights = Vec::new();
        for factor in &factors {
            let mut edges = Vec::with_capacity(factor.len());
            for &(v, wlog) in factor {
                let edge = edge_weights.len();
                edge_weights.push(wlog);
                var_lists[v].push(edge);
                edges.push(edge);
            }
            check_lists.push(edges);
        }

        let (max_var_degree, var_degrees, var_edges) = flatten(&var_lists);
        let (max_check_degree, check_degrees, check_edges) = flatten(&check_lists);
        QraCode::from_tables(&CodeTables {
            k,
            n,
            acc_input_idx,
            acc_input_wlog,
            max_var_degree,
            max_check_degree,
            var_degrees: &var_degrees,
            check_degrees: &check_degrees,
            var_edges: &var_edges,
            check_edges: &check_edges,
            edge_weights: &edge_weights,
        })
    }

    /// Returns the number of information symbols.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the number of codeword symbols.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the number of check symbols.
    pub fn num_check_symbols(&self) -> usize {
        self.n - self.k
    }

    /// Returns the code rate.
    pub fn rate(&self) -> f64 {
        self.k as f64 / self.n as f64
    }

    /// Returns the number of variable nodes of the factor graph.
    pub fn num_variables(&self) -> usize {
        self.var_degrees.len()
    }

    /// Returns the number of factor nodes of the factor graph, including the
    /// intrinsic factors.
    pub fn num_factors(&self) -> usize {
        self.check_degrees.len()
    }

    /// Returns the number of edges of the factor graph.
    pub fn num_edges(&self) -> usize {
        self.edge_weights.len()
    }

    /// Returns the maximum variable node degree.
    pub fn max_var_degree(&self) -> usize {
        self.max_var_degree
    }

    /// Returns the maximum check node degree.
    pub fn max_check_degree(&self) -> usize {
        self.max_check_degree
    }

    /// Returns the degree of a variable node.
    pub fn var_degree(&self, v: usize) -> usize {
        self.var_degrees[v]
    }

    /// Returns the degree of a factor node.
    pub fn check_degree(&self, c: usize) -> usize {
        self.check_degrees[c]
    }

    /// Returns the edges incident to a variable node.
    ///
    /// The first edge is the edge to the intrinsic factor of the variable.
    pub fn var_edges(&self, v: usize) -> &[usize] {
        let start = v * self.max_var_degree;
        &self.var_edges[start..start + self.var_degrees[v]]
    }

    /// Returns the edges incident to a factor node.
    pub fn check_edges(&self, c: usize) -> &[usize] {
        let start = c * self.max_check_degree;
        &self.check_edges[start..start + self.check_degrees[c]]
    }

    /// Returns the edge connecting a variable node to its intrinsic factor.
    pub fn intrinsic_edge(&self, v: usize) -> usize {
        self.var_edges[v * self.max_var_degree]
    }

    /// Returns an iterator over the parity constraint factors.
    pub fn parity_checks(&self) -> std::ops::Range<usize> {
        self.n..self.num_factors()
    }

    /// Returns the weight logarithm of an edge.
    pub fn edge_weight(&self, edge: usize) -> u8 {
        self.edge_weights[edge]
    }

    /// Returns the accumulator input symbol table.
    pub fn acc_input_idx(&self) -> &[usize] {
        &self.acc_input_idx
    }

    /// Returns the accumulator input weight logarithm table.
    pub fn acc_input_wlog(&self) -> &[u8] {
        &self.acc_input_wlog
    }
}

// Converts per-node edge lists to the fixed-width row layout. Unused slots
// are filled with zeros.
fn flatten(lists: &[Vec<usize>]) -> (usize, Vec<usize>, Vec<usize>) {
    let max_degree = lists.iter().map(Vec::len).max().unwrap_or(0);
    let degrees = lists.iter().map(Vec::len).collect();
    let mut table = vec![0; lists.len() * max_degree];
    for (row, list) in table.chunks_exact_mut(max_degree.max(1)).zip(lists.iter()) {
        row[..list.len()].copy_from_slice(list);
    }
    (max_degree, degrees, table)
}

#[cfg(test)]
mod test {
    use super::*;

    // (2, 4) code with accumulator x0, x1, x0
    fn small_code() -> QraCode {
        QraCode::from_accumulator(2, 4, &[0, 1, 0], &[0, 5, 17]).unwrap()
    }

    #[test]
    fn from_accumulator() {
        let code = small_code();
        assert_eq!(code.num_variables(), 4);
        assert_eq!(code.num_factors(), 4 + 2);
        assert_eq!(code.num_edges(), 4 + 3 + 3);
        assert_eq!(code.max_var_degree(), 3);
        assert_eq!(code.max_check_degree(), 3);
        assert_eq!(code.var_edges(0), &[0, 4, 8]);
        assert_eq!(code.var_edges(1), &[1, 5]);
        assert_eq!(code.var_edges(2), &[2, 6, 7]);
        assert_eq!(code.var_edges(3), &[3, 9]);
        assert_eq!(code.check_edges(4), &[4, 5, 6]);
        assert_eq!(code.check_edges(5), &[7, 8, 9]);
        assert_eq!(code.edge_weight(5), 5);
        assert_eq!(code.edge_weight(8), 17);
        assert_eq!(code.edge_weight(7), 0);
        assert_eq!(code.parity_checks(), 4..6);
        for v in 0..4 {
            assert_eq!(code.intrinsic_edge(v), v);
            assert_eq!(code.check_edges(v), &[v]);
        }
    }

    #[test]
    fn degree_sums() {
        let code = small_code();
        let var_sum: usize = (0..code.num_variables()).map(|v| code.var_degree(v)).sum();
        let check_sum: usize = (0..code.num_factors()).map(|c| code.check_degree(c)).sum();
        assert_eq!(var_sum, code.num_edges());
        assert_eq!(check_sum, code.num_edges());
    }

    fn small_tables<'a>(
        var_degrees: &'a [usize],
        var_edges: &'a [usize],
        check_edges: &'a [usize],
    ) -> CodeTables<'a> {
        CodeTables {
            k: 1,
            n: 2,
            acc_input_idx: &[0, 0],
            // alpha + alpha^6 = 1, so both symbols are equal
            acc_input_wlog: &[1, 6],
            max_var_degree: 2,
            max_check_degree: 2,
            var_degrees,
            check_degrees: &[1, 1, 2],
            var_edges,
            check_edges,
            edge_weights: &[0, 0, 0, 0],
        }
    }

    #[test]
    fn from_tables() {
        let tables = small_tables(&[2, 2], &[0, 2, 1, 3], &[0, 0, 1, 0, 2, 3]);
        let code = QraCode::from_tables(&tables).unwrap();
        assert_eq!(code.var_edges(1), &[1, 3]);
        assert_eq!(code.check_edges(2), &[2, 3]);
    }

    #[test]
    fn degree_sum_mismatch() {
        let tables = small_tables(&[2, 1], &[0, 2, 1, 0], &[0, 0, 1, 0, 2, 3]);
        assert_eq!(
            QraCode::from_tables(&tables),
            Err(Error::DegreeSumMismatch {
                var_sum: 3,
                check_sum: 4,
                edges: 4,
            })
        );
    }

    #[test]
    fn edge_out_of_range() {
        let tables = small_tables(&[2, 2], &[0, 2, 1, 4], &[0, 0, 1, 0, 2, 3]);
        assert_eq!(
            QraCode::from_tables(&tables),
            Err(Error::EdgeOutOfRange {
                node: Node::Variable(1),
                edge: 4,
                edges: 4,
            })
        );
    }

    #[test]
    fn repeated_edge() {
        let tables = small_tables(&[2, 2], &[0, 2, 1, 2], &[0, 0, 1, 0, 2, 3]);
        assert_eq!(
            QraCode::from_tables(&tables),
            Err(Error::EdgeMultiplicity {
                edge: 2,
                side: "variable",
                count: 2,
            })
        );
    }

    #[test]
    fn intrinsic_layout() {
        let tables = small_tables(&[2, 2], &[2, 0, 1, 3], &[0, 0, 1, 0, 2, 3]);
        assert_eq!(
            QraCode::from_tables(&tables),
            Err(Error::IntrinsicFactor(0))
        );
    }

    #[test]
    fn zero_max_degrees() {
        let mut tables = CodeTables {
            k: 1,
            n: 2,
            acc_input_idx: &[0, 0],
            acc_input_wlog: &[1, 6],
            max_var_degree: 1,
            max_check_degree: 0,
            var_degrees: &[1, 1],
            check_degrees: &[1, 1],
            var_edges: &[0, 1],
            check_edges: &[],
            edge_weights: &[0, 0],
        };
        assert_eq!(
            QraCode::from_tables(&tables),
            Err(Error::DegreeOutOfRange {
                node: Node::Check(0),
                degree: 1,
                min: 1,
                max: 0,
            })
        );
        tables.max_var_degree = 0;
        tables.max_check_degree = 1;
        tables.var_edges = &[];
        tables.check_edges = &[0, 1];
        assert_eq!(
            QraCode::from_tables(&tables),
            Err(Error::DegreeOutOfRange {
                node: Node::Variable(0),
                degree: 1,
                min: 1,
                max: 0,
            })
        );
    }

    // graph of small_code() with the accumulator tables given as arguments
    fn small_code_tables<'a>(
        acc_input_idx: &'a [usize],
        acc_input_wlog: &'a [u8],
    ) -> CodeTables<'a> {
        CodeTables {
            k: 2,
            n: 4,
            acc_input_idx,
            acc_input_wlog,
            max_var_degree: 3,
            max_check_degree: 3,
            var_degrees: &[3, 2, 3, 2],
            check_degrees: &[1, 1, 1, 1, 3, 3],
            var_edges: &[0, 4, 8, 1, 5, 0, 2, 6, 7, 3, 9, 0],
            check_edges: &[0, 0, 0, 1, 0, 0, 2, 0, 0, 3, 0, 0, 4, 5, 6, 7, 8, 9],
            edge_weights: &[0, 0, 0, 0, 0, 5, 0, 0, 17, 0],
        }
    }

    #[test]
    fn accumulator_matches_graph() {
        let tables = small_code_tables(&[0, 1, 0], &[0, 5, 17]);
        assert_eq!(QraCode::from_tables(&tables), Ok(small_code()));
    }

    #[test]
    fn accumulator_mismatch() {
        let tables = small_code_tables(&[1, 0, 1], &[3, 9, 40]);
        assert_eq!(
            QraCode::from_tables(&tables),
            Err(Error::ParityMismatch {
                check: 4,
                symbol: 0,
            })
        );
    }

    #[test]
    fn bad_accumulator() {
        assert_eq!(
            QraCode::from_accumulator(2, 4, &[0, 1], &[0, 0]),
            Err(Error::TableLength {
                table: "acc_input_idx",
                expected: 3,
                found: 2,
            })
        );
        assert_eq!(
            QraCode::from_accumulator(2, 4, &[0, 2, 1], &[0, 0, 0]),
            Err(Error::AccumulatorIndex {
                position: 1,
                index: 2,
            })
        );
        assert_eq!(
            QraCode::from_accumulator(2, 4, &[0, 1, 1], &[0, 63, 0]),
            Err(Error::WeightOutOfRange {
                table: "acc_input_wlog",
                position: 1,
                wlog: 63,
            })
        );
        assert_eq!(
            QraCode::from_accumulator(4, 4, &[0], &[0]),
            Err(Error::InvalidDimensions { k: 4, n: 4 })
        );
    }
}
