//! Contains simple functions implementing the truth tables of the binary operators
//! supported by `BinaryOp`. `BinaryOp::apply` dispatches to these.

/// Operator function corresponding to $x \land y$.
pub fn and(l: bool, r: bool) -> bool {
    l && r
}

/// Operator function corresponding to $x \lor y$.
pub fn or(l: bool, r: bool) -> bool {
    l || r
}

/// Operator function corresponding to $x \Rightarrow y$.
pub fn imp(l: bool, r: bool) -> bool {
    !l || r
}

/// Operator function corresponding to $x \Leftarrow y$.
pub fn converse_imp(l: bool, r: bool) -> bool {
    l || !r
}

/// Operator function corresponding to $x \not\Leftrightarrow y$.
pub fn xor(l: bool, r: bool) -> bool {
    l ^ r
}

/// Operator function corresponding to $x \Leftrightarrow y$.
pub fn iff(l: bool, r: bool) -> bool {
    l == r
}

/// Operator function corresponding to $\neg(x \land y)$ (Sheffer stroke).
pub fn nand(l: bool, r: bool) -> bool {
    !(l && r)
}

/// Operator function corresponding to $\neg(x \lor y)$ (Peirce arrow).
pub fn nor(l: bool, r: bool) -> bool {
    !(l || r)
}
