//! Splits free-form recipe output into blocks.
//!
//! The scanner is a two-state machine over lines. While `SeekingBlock` it
//! discards everything until a marker line (`Recipe 1:`, `Recipe 2:` or
//! `Recipe 3:`). In `InBlock` each further non-empty line is appended to the
//! open block's body; the next marker closes the block and opens another.
//! Whatever block is still open when input ends is closed too. A block whose
//! body stayed empty is not emitted.

const MARKERS: [&str; 3] = ["Recipe 1:", "Recipe 2:", "Recipe 3:"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeBlock {
    /// The marker line, stripped of list and emphasis decoration.
    pub name: String,
    /// Body lines, trimmed and joined with single spaces.
    pub body: String,
}

enum ScanState {
    SeekingBlock,
    InBlock { name: String, body: Vec<String> },
}

impl ScanState {
    /// Leave the current state, emitting the open block if it has a body.
    fn close(self, out: &mut Vec<RecipeBlock>) {
        if let ScanState::InBlock { name, body } = self {
            if !body.is_empty() {
                out.push(RecipeBlock {
                    name,
                    body: body.join(" "),
                });
            }
        }
    }
}

pub fn parse_recipe_blocks(content: &str) -> Vec<RecipeBlock> {
    let mut blocks = Vec::new();
    let mut state = ScanState::SeekingBlock;

    for line in content.lines() {
        let line = line.trim();
        if let Some(name) = marker_name(line) {
            state.close(&mut blocks);
            state = ScanState::InBlock {
                name,
                body: Vec::new(),
            };
            continue;
        }
        if line.is_empty() {
            continue;
        }
        if let ScanState::InBlock { body, .. } = &mut state {
            body.push(line.to_string());
        }
    }
    state.close(&mut blocks);

    blocks
}

/// If the line carries a marker, the block name starting at that marker.
fn marker_name(line: &str) -> Option<String> {
    let start = MARKERS.iter().filter_map(|m| line.find(m)).min()?;
    let name = line[start..]
        .trim_end_matches(|c: char| c == '*' || c == '#' || c.is_whitespace())
        .to_string();
    Some(name)
}
