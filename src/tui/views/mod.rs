pub mod detail;
pub mod explorer;

#[cfg(test)]
pub(crate) mod test_render {
    use ratatui::buffer::Buffer;

    /// Flatten a rendered buffer into newline-separated rows.
    pub fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::with_capacity(usize::from(area.width + 1) * usize::from(area.height));
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}
