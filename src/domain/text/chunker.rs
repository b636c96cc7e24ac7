use regex::Regex;
use std::sync::OnceLock;

/// Sentence terminators, including the Devanagari danda used by several Indic scripts
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', '।'];

fn sentence_boundary() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[.!?।]\s+|\n\s*\n").expect("valid sentence pattern"))
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split text into chunks of at most `max_chars` characters.
///
/// Chunks are cut at sentence boundaries first, then at word boundaries for
/// sentences that are too long on their own. Anything still over the limit
/// (a single unbreakable run) is hard-sliced. Joining the chunks with single
/// spaces yields text equivalent to the input, with whitespace normalized at
/// the chunk boundaries.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);

    if char_len(text) <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for sentence in split_sentences(text.trim()) {
        let sentence_len = char_len(sentence);
        let candidate_len = if current.is_empty() {
            sentence_len
        } else {
            current_len + 1 + sentence_len
        };

        if candidate_len <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(sentence);
            current_len = candidate_len;
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }

        if sentence_len <= max_chars {
            current = sentence.to_string();
            current_len = sentence_len;
        } else {
            // Sentence too long on its own: pack it word by word, keep the tail open
            let mut packed = pack_words(sentence, max_chars);
            let tail = packed.pop().unwrap_or_default();
            chunks.extend(packed);
            current_len = char_len(&tail);
            current = tail;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
        .into_iter()
        .flat_map(|chunk| hard_slice(chunk, max_chars))
        .collect()
}

/// Split on sentence terminators followed by whitespace and on blank-line paragraph breaks.
/// Terminators stay attached to their sentence; empty pieces are dropped.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut last_end = 0;

    for mat in sentence_boundary().find_iter(text) {
        let sentence_end = match mat.as_str().chars().next() {
            Some(c) if SENTENCE_TERMINATORS.contains(&c) => mat.start() + c.len_utf8(),
            _ => mat.start(),
        };
        sentences.push(text[last_end..sentence_end].trim());
        last_end = mat.end();
    }
    sentences.push(text[last_end..].trim());

    sentences.retain(|s| !s.is_empty());
    sentences
}

/// Greedy word-level packing. A single word longer than `max_chars` is emitted
/// as its own chunk and left for [`hard_slice`].
fn pack_words(sentence: &str, max_chars: usize) -> Vec<String> {
    let mut packed = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in sentence.split_whitespace() {
        let word_len = char_len(word);
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            packed.push(std::mem::replace(&mut current, word.to_string()));
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        packed.push(current);
    }

    packed
}

/// Slice a chunk into fixed windows of `max_chars` characters if it is still too long
fn hard_slice(chunk: String, max_chars: usize) -> Vec<String> {
    if char_len(&chunk) <= max_chars {
        return vec![chunk];
    }

    let chars: Vec<char> = chunk.chars().collect();
    chars
        .chunks(max_chars)
        .map(|window| window.iter().collect::<String>())
        .filter(|window| !window.trim().is_empty())
        .collect()
}
