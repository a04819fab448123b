// src/export/pdf.rs

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

pub(crate) const PAGE_W: f32 = 595.0;
pub(crate) const PAGE_H: f32 = 842.0;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

/// A4 canvas addressed from the top-left corner, like a screen.
///
/// Pages are written in order; `begin_page` closes the current one.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    regular_id: Ref,
    bold_id: Ref,
    page_refs: Vec<Ref>,
    current: Option<(Ref, Content)>,
    next_id: i32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let regular_id = Ref::new(3);
        let bold_id = Ref::new(4);

        pdf.type1_font(regular_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            regular_id,
            bold_id,
            page_refs: Vec::new(),
            current: None,
            next_id: 5,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    pub fn begin_page(&mut self) {
        self.finalize_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
                .contents(content_id);

            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(FONT_REGULAR, self.regular_id);
            fonts.pair(FONT_BOLD, self.bold_id);
        }

        self.current = Some((content_id, Content::new()));
    }

    fn finalize_page(&mut self) {
        if let Some((id, content)) = self.current.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn content(&mut self) -> &mut Content {
        if self.current.is_none() {
            self.begin_page();
        }
        &mut self.current.get_or_insert_with(|| (Ref::new(0), Content::new())).1
    }

    /// Draw `text` with its baseline at `top` points from the page top.
    pub fn text(&mut self, x: f32, top: f32, size: f32, bold: bool, text: &str) {
        let font = if bold { FONT_BOLD } else { FONT_REGULAR };
        let bytes = encode_win_ansi(text);

        let content = self.content();
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, PAGE_H - top]);
        content.show(Str(&bytes));
        content.end_text();
    }

    /// Horizontal rule at `top` from `x1` to `x2`.
    pub fn hline(&mut self, x1: f32, x2: f32, top: f32) {
        let y = PAGE_H - top;
        let content = self.content();
        content.save_state();
        content.set_line_width(0.5);
        content.set_stroke_rgb(0.0, 0.0, 0.0);
        content.move_to(x1, y);
        content.line_to(x2, y);
        content.stroke();
        content.restore_state();
    }

    pub fn finish(mut self) -> Vec<u8> {
        if self.current.is_none() {
            self.begin_page();
        }
        self.finalize_page();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        self.pdf.finish()
    }
}

/// Helvetica is used with WinAnsiEncoding: Latin-1 maps directly, the euro
/// sign has its own code, anything else becomes `?`.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '€' => 0x80,
            '’' => 0x92,
            '–' => 0x96,
            c if (c as u32) < 0x80 || ((c as u32) >= 0xA0 && (c as u32) <= 0xFF) => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

/// Rough Helvetica advance width, good enough to wrap table cells.
pub(crate) fn approx_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}
