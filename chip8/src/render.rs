use chip8_core::constants::DISPLAY_WIDTH;
use chip8_core::state::FrameBuffer;

/// Formats a Chip-8 FrameBuffer as text, one line per row.
///
/// Lit pixels are `#` and dark ones are `.`
///
/// # Arguments
/// * `frame` a Chip-8 FrameBuffer
pub fn frame_to_text(frame: &FrameBuffer) -> String {
    frame
        .chunks(DISPLAY_WIDTH)
        .map(|row| {
            row.iter()
                .map(|&pixel| if pixel == 1 { '#' } else { '.' })
                .chain(std::iter::once('\n'))
                .collect::<String>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chip8_core::constants::{DISPLAY_HEIGHT, FRAME_BUFFER_SIZE};

    #[test]
    fn test_frame_to_text() {
        let mut frame: FrameBuffer = [0; FRAME_BUFFER_SIZE];
        frame[0..2].copy_from_slice(&[0, 1]);
        frame[DISPLAY_WIDTH..DISPLAY_WIDTH + 2].copy_from_slice(&[1, 0]);
        let text = frame_to_text(&frame);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), DISPLAY_HEIGHT);
        assert!(lines.iter().all(|line| line.len() == DISPLAY_WIDTH));
        assert!(lines[0].starts_with(".#."));
        assert!(lines[1].starts_with("#.."));
    }
}
