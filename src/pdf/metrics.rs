// Advance widths of the core Helvetica font, in 1/1000 em, for ASCII 32..=126.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a..m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n..z
    334, 260, 334, 584, // {..~
];

const FALLBACK_WIDTH: u16 = 556;

/// Width in points of `text` set in Helvetica at `size` points.
pub fn helvetica_width(text: &str, size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| match c as u32 {
            code @ 32..=126 => u32::from(HELVETICA_WIDTHS[(code - 32) as usize]),
            _ => u32::from(FALLBACK_WIDTH),
        })
        .sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_printable_ascii() {
        assert_eq!(HELVETICA_WIDTHS.len(), ('~' as usize) - (' ' as usize) + 1);
        assert_eq!(helvetica_width("A", 1000.0), 667.0);
        assert_eq!(helvetica_width("~", 1000.0), 584.0);
    }

    #[test]
    fn uuid_width_at_twelve_points() {
        let id = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        // lowercase hex is 556 wide except 'c' and 'f'
        let units: u32 = id
            .chars()
            .map(|c| match c {
                '-' => 333,
                'c' => 500,
                'f' => 278,
                _ => 556,
            })
            .sum();
        assert_eq!(units, 29 * 556 + 500 + 2 * 278 + 4 * 333);
        assert!((helvetica_width(id, 12.0) - units as f32 * 12.0 / 1000.0).abs() < 1e-3);
    }

    #[test]
    fn empty_text_has_no_width() {
        assert_eq!(helvetica_width("", 12.0), 0.0);
    }
}
