//! Pure block parsing for the line-oriented response format.
//!
//! A block is a maximal run of non-blank lines. A blank line closes the
//! current block; a second consecutive blank line ends the data, as does
//! end of input. Everything here works on in-memory line sequences;
//! resource acquisition lives in [`super::store`].

use replyomat_model::{Keyword, ResponseEntry};

/// Consecutive blank lines that end the data.
const BLANK_RUN_LIMIT: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ParseState {
    InBlock,
    BetweenBlocks,
    Terminated,
}

pub(crate) fn parse_blocks(lines: impl IntoIterator<Item = String>) -> Vec<Vec<String>> {
    let mut blocks: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut state = ParseState::BetweenBlocks;
    let mut blank_run = 0u32;

    for line in lines {
        if state == ParseState::Terminated {
            break;
        }
        if line.trim().is_empty() {
            if state == ParseState::InBlock {
                blocks.push(std::mem::take(&mut current));
            }
            blank_run += 1;
            state = if blank_run >= BLANK_RUN_LIMIT {
                ParseState::Terminated
            } else {
                ParseState::BetweenBlocks
            };
        } else {
            blank_run = 0;
            current.push(line);
            state = ParseState::InBlock;
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Table format: first block line is the keyword, the rest is the body with
/// one trailing newline per line. A keyword with no body lines stores an
/// empty body.
pub(crate) fn table_entries(blocks: Vec<Vec<String>>) -> Vec<ResponseEntry> {
    blocks
        .into_iter()
        .filter_map(|block| {
            let mut lines = block.into_iter();
            let keyword = Keyword::from(lines.next()?);
            let body: String = lines.map(|line| line + "\n").collect();
            Some(ResponseEntry { keyword, body })
        })
        .collect()
}

/// Pool format: the whole block, newline-joined, is one response.
pub(crate) fn pool_bodies(blocks: Vec<Vec<String>>) -> Vec<String> {
    blocks.into_iter().map(|block| block.join("\n")).collect()
}
