use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::{Error, Result};
use crate::models::application::ApplicationRecord;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const LINE_HEIGHT: f32 = 8.0;
const SECTION_SPACING: f32 = 16.0;
/// Content must stop above the footer block.
const CONTENT_BOTTOM: f32 = PAGE_HEIGHT - 45.0;
const FOOTER_Y: f32 = PAGE_HEIGHT - 40.0;

const PT_TO_MM: f32 = 0.352_78;
/// Average Helvetica glyph advance, as a fraction of the font size.
const GLYPH_ASPECT: f32 = 0.5;

/// One positioned piece of text. `y` runs downward from the top of the
/// page so layout can be asserted on directly.
#[derive(Debug, Clone)]
pub struct TextRun {
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct DocumentLayout {
    pub runs: Vec<TextRun>,
    pub pages: usize,
}

impl DocumentLayout {
    /// First run whose text starts with `prefix`, reading order.
    pub fn find(&self, prefix: &str) -> Option<&TextRun> {
        self.runs.iter().find(|run| run.text.starts_with(prefix))
    }
}

struct Cursor {
    page: usize,
    y: f32,
    runs: Vec<TextRun>,
}

impl Cursor {
    fn new(start_y: f32) -> Self {
        Self {
            page: 0,
            y: start_y,
            runs: Vec::new(),
        }
    }

    /// Break to a fresh page if the next line would run into the footer.
    fn ensure_space(&mut self, height: f32) {
        if self.y + height > CONTENT_BOTTOM {
            self.page += 1;
            self.y = MARGIN;
        }
    }

    fn put(&mut self, x: f32, size: f32, bold: bool, text: &str) {
        self.runs.push(TextRun {
            page: self.page,
            x,
            y: self.y,
            size,
            bold,
            text: text.to_string(),
        });
    }

    fn line(&mut self, x: f32, size: f32, bold: bool, text: &str) {
        self.ensure_space(LINE_HEIGHT);
        self.put(x, size, bold, text);
        self.y += LINE_HEIGHT;
    }

    fn centered(&mut self, size: f32, bold: bool, text: &str) {
        let x = (PAGE_WIDTH - text_width(text, size)) / 2.0;
        self.put(x.max(MARGIN), size, bold, text);
    }

    fn advance(&mut self, height: f32) {
        self.y += height;
    }
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_ASPECT * PT_TO_MM
}

fn max_chars(width: f32, size: f32) -> usize {
    ((width / (size * GLYPH_ASPECT * PT_TO_MM)) as usize).max(1)
}

/// Greedy word wrap; a word longer than the line is hard-split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split: usize = word.char_indices().nth(max_chars).map(|(i, _)| i).unwrap();
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Lay out the full application document: title block, the three record
/// sections, status lines and a footer on the final page. Long free-text
/// fields are wrapped to the printable width and everything below them is
/// shifted down by the wrapped height.
pub fn layout(
    record: &ApplicationRecord,
    membership_id: &str,
    generated_at: DateTime<Utc>,
) -> DocumentLayout {
    let mut cursor = Cursor::new(30.0);

    cursor.centered(24.0, true, "FREE REPUBLIC OF VERDIS");
    cursor.y = 45.0;
    cursor.centered(18.0, true, "CITIZENSHIP APPLICATION");
    cursor.y = 60.0;
    cursor.centered(16.0, false, &format!("Membership ID: {membership_id}"));
    cursor.y = 72.0;
    cursor.centered(
        12.0,
        false,
        &format!("Application Date: {}", generated_at.format("%Y-%m-%d")),
    );
    cursor.y = 90.0;

    // Personal information: label/value pairs, long values wrapped.
    cursor.line(MARGIN, 16.0, true, "PERSONAL INFORMATION");
    cursor.advance(LINE_HEIGHT * 0.5);
    let full_name = format!("{} {}", record.first_name, record.last_name);
    let pairs = [
        ("Full Name:", full_name.as_str()),
        ("Email:", record.email.as_str()),
        ("Phone:", record.phone.as_str()),
        ("Date of Birth:", record.date_of_birth.as_str()),
        ("Current Nationality:", record.nationality.as_str()),
        ("Address:", record.address.as_str()),
    ];
    let value_width = PAGE_WIDTH - 100.0;
    for (label, value) in pairs {
        let lines = wrap_text(value, max_chars(value_width, 11.0));
        cursor.ensure_space(LINE_HEIGHT * lines.len() as f32);
        cursor.put(MARGIN, 11.0, true, label);
        for line in &lines {
            cursor.put(80.0, 11.0, false, line);
            cursor.advance(LINE_HEIGHT);
        }
    }
    cursor.advance(SECTION_SPACING);

    cursor.line(MARGIN, 16.0, true, "PROFESSIONAL BACKGROUND");
    cursor.advance(LINE_HEIGHT * 0.5);
    for (label, value) in [
        ("Occupation:", record.occupation.as_str()),
        ("Education Level:", record.education.as_str()),
    ] {
        cursor.ensure_space(LINE_HEIGHT);
        cursor.put(MARGIN, 11.0, true, label);
        cursor.put(80.0, 11.0, false, value);
        cursor.advance(LINE_HEIGHT);
    }
    cursor.advance(LINE_HEIGHT);
    cursor.line(MARGIN, 11.0, true, "Skills & Experience:");
    let body_width = PAGE_WIDTH - 2.0 * MARGIN;
    for line in wrap_text(&record.skills, max_chars(body_width, 11.0)) {
        cursor.line(MARGIN, 11.0, false, &line);
    }
    cursor.advance(SECTION_SPACING);

    cursor.line(MARGIN, 16.0, true, "APPLICATION DETAILS");
    cursor.advance(LINE_HEIGHT * 0.5);
    cursor.line(MARGIN, 11.0, true, "Motivation for Citizenship:");
    for line in wrap_text(&record.motivation, max_chars(body_width, 11.0)) {
        cursor.line(MARGIN, 11.0, false, &line);
    }
    cursor.advance(LINE_HEIGHT);
    cursor.ensure_space(LINE_HEIGHT);
    cursor.put(MARGIN, 11.0, true, "Criminal Record Declaration:");
    cursor.put(120.0, 11.0, false, &record.criminal_record);
    cursor.advance(LINE_HEIGHT * 2.0);

    cursor.line(MARGIN, 14.0, true, "APPLICATION STATUS");
    cursor.advance(LINE_HEIGHT * 0.5);
    cursor.line(MARGIN, 11.0, false, "Application Submitted Successfully");
    cursor.line(
        MARGIN,
        11.0,
        false,
        "Status: Under Review by Ministry of Citizenship",
    );
    cursor.line(MARGIN, 11.0, false, "Expected Review Time: 2-4 weeks");

    // Footer pinned near the bottom of the final page.
    let footer_page = cursor.page;
    let mut footer_y = FOOTER_Y;
    for text in [
        "Free Republic of Verdis - Ministry of Citizenship",
        "For inquiries: citizenship@verdis.org",
        "Official Document - Please retain for your records",
    ] {
        let x = (PAGE_WIDTH - text_width(text, 10.0)) / 2.0;
        cursor.runs.push(TextRun {
            page: footer_page,
            x: x.max(MARGIN),
            y: footer_y,
            size: 10.0,
            bold: false,
            text: text.to_string(),
        });
        footer_y += LINE_HEIGHT * 0.75;
    }

    DocumentLayout {
        pages: cursor.page + 1,
        runs: cursor.runs,
    }
}

/// Paint the layout to PDF bytes. Purely a transformation of in-memory
/// data; the caller decides what to do with the bytes.
pub fn render_pdf(
    record: &ApplicationRecord,
    membership_id: &str,
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>> {
    let doc_layout = layout(record, membership_id, generated_at);

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Verdis Citizenship Application",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| Error::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| Error::Pdf(e.to_string()))?;

    let mut pages = vec![(first_page, first_layer)];
    for _ in 1..doc_layout.pages {
        pages.push(doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1"));
    }

    for run in &doc_layout.runs {
        let (page, layer) = pages[run.page];
        let layer = doc.get_page(page).get_layer(layer);
        let font = if run.bold { &bold } else { &regular };
        layer.use_text(
            &run.text,
            run.size,
            Mm(run.x),
            Mm(PAGE_HEIGHT - run.y),
            font,
        );
    }

    doc.save_to_bytes().map_err(|e| Error::Pdf(e.to_string()))
}

/// Suggested filename for the downloadable document.
pub fn document_filename(membership_id: &str) -> String {
    format!("Verdis-Citizenship-Application-{membership_id}.pdf")
}
