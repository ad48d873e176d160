use yama_protocol::OffsetUnit;

/// Convert a UTF-8 byte index into an offset counted in `unit`.
///
/// An index inside a multi-byte character maps to the start of that character; an index past the
/// end of `text` maps to its full length.
pub fn byte_to_offset(text: &str, byte_index: usize, unit: OffsetUnit) -> usize {
    if byte_index == 0 {
        return 0;
    }

    let mut bytes = 0;
    let mut offset = 0;
    for c in text.chars() {
        bytes += c.len_utf8();
        if bytes > byte_index {
            return offset;
        }
        offset += unit.width(c);
        if bytes == byte_index {
            return offset;
        }
    }
    offset
}
