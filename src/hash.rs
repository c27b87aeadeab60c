// =========================================================
//   tth — Toy Tetragraph Hash
// =========================================================

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const MODULUS: u32 = 26;
const SIDE: usize = 4;
const BLOCK_LETTERS: usize = SIDE * SIDE;

/// 4×4 matrix of letter values, indexed `[row][column]`.
pub type Block = [[u8; SIDE]; SIDE];

/// Per-column accumulator carried across blocks. Every element is in `0..26`.
pub type RunningHash = [u8; SIDE];

// =========================================================
//   row permutation table
// =========================================================

#[derive(Clone, Copy)]
enum Shift {
    Left(usize),
    Reverse,
}

const ROW_SHIFT: [Shift; SIDE] = [
    Shift::Left(1),
    Shift::Left(2),
    Shift::Left(3),
    Shift::Reverse,
];

// =========================================================
//   sanitize
// =========================================================

/// Keeps ASCII letters only, folded to uppercase.
///
/// Letters outside `A-Z` (accented, `ß`, non-Latin scripts) are dropped,
/// not case-expanded.
pub fn sanitize(message: &str) -> String {
    message
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[inline(always)]
fn letter_value(letter: u8) -> Option<u8> {
    letter
        .is_ascii_alphabetic()
        .then(|| letter.to_ascii_uppercase() - b'A')
}

// =========================================================
//   blocks
// =========================================================

/// Splits sanitized text into 4×4 blocks in row-major order.
///
/// Cells past the end of the text hold 0 (the value of `A`). Always returns
/// at least one block, so empty text yields a single all-zero block.
/// Bytes that are not ASCII letters are skipped and lowercase is folded, so
/// `build_blocks(text) == build_blocks(&sanitize(text))`.
pub fn build_blocks(text: &str) -> Vec<Block> {
    let letters: Vec<u8> = text.bytes().filter_map(letter_value).collect();
    let count = letters.len().div_ceil(BLOCK_LETTERS).max(1);

    let mut blocks = vec![[[0u8; SIDE]; SIDE]; count];
    for (pos, &value) in letters.iter().enumerate() {
        let cell = pos % BLOCK_LETTERS;
        blocks[pos / BLOCK_LETTERS][cell / SIDE][cell % SIDE] = value;
    }
    blocks
}

// =========================================================
//   compression round
// =========================================================

#[inline(always)]
fn fold_columns(hash: &mut RunningHash, block: &Block) {
    for (c, h) in hash.iter_mut().enumerate() {
        let column: u32 = block.iter().map(|row| row[c] as u32).sum();
        *h = ((*h as u32 + column % MODULUS) % MODULUS) as u8;
    }
}

/// Applies the fixed per-row rearrangement: rows 0, 1 and 2 rotate left by
/// their index plus one, row 3 is reversed.
pub fn shift_rows(block: &Block) -> Block {
    let mut shifted = *block;
    for (row, shift) in shifted.iter_mut().zip(ROW_SHIFT) {
        match shift {
            Shift::Left(n) => row.rotate_left(n),
            Shift::Reverse => row.reverse(),
        }
    }
    shifted
}

/// One compression round: fold, shift, fold. Returns the shifted block and
/// the running hash after the first fold.
fn round(hash: &mut RunningHash, index: usize, block: &Block) -> (RunningHash, Block) {
    fold_columns(hash, block);
    let pre_shift = *hash;
    let shifted = shift_rows(block);
    fold_columns(hash, &shifted);
    log::trace!("block {index}: running hash {pre_shift:?} -> {hash:?}");
    (pre_shift, shifted)
}

/// Folds every block into the running hash, in order.
pub fn compress(blocks: &[Block]) -> RunningHash {
    let mut hash: RunningHash = [0; SIDE];
    for (i, block) in blocks.iter().enumerate() {
        round(&mut hash, i, block);
    }
    hash
}

// =========================================================
//   encode
// =========================================================

/// Maps each running-hash value to its letter, reducing mod 26 first.
pub fn encode(hash: &RunningHash) -> String {
    hash.iter()
        .map(|&v| ALPHABET[(v as u32 % MODULUS) as usize] as char)
        .collect()
}

// =========================================================
//   trace
// =========================================================

/// Intermediate state of one block's compression round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTrace {
    /// Letter values as read from the message.
    pub block: Block,
    /// The block after the row permutation.
    pub shifted: Block,
    /// Running hash after the pre-shift column fold.
    pub pre_shift: RunningHash,
    /// Running hash after the post-shift column fold.
    pub post_shift: RunningHash,
}

/// Runs the full pipeline over `message`, recording every round.
pub fn trace(message: &str) -> Vec<RoundTrace> {
    let mut hash: RunningHash = [0; SIDE];
    build_blocks(&sanitize(message))
        .into_iter()
        .enumerate()
        .map(|(i, block)| {
            let (pre_shift, shifted) = round(&mut hash, i, &block);
            RoundTrace {
                block,
                shifted,
                pre_shift,
                post_shift: hash,
            }
        })
        .collect()
}

// =========================================================
//   hash
// =========================================================

/// Computes the 4-letter Toy Tetragraph Hash of `message`.
///
/// Only ASCII letters contribute. A message with none (including `""`)
/// still hashes, to `"AAAA"`.
pub fn tth_hash(message: &str) -> String {
    let text = sanitize(message);
    let blocks = build_blocks(&text);
    log::trace!("{} letters in {} block(s)", text.len(), blocks.len());
    encode(&compress(&blocks))
}
