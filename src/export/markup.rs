//! XML export: `<businesses>` root with one `<business>` element per record.
//!
//! Free-text fields (`name`, `address`) are emitted as CDATA so embedded
//! markup characters cannot break the document; everything else is plain
//! escaped text.

use crate::error::ScrapeError;
use crate::model::BusinessRecord;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::path::Path;

fn write_text<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &str,
) -> Result<(), ScrapeError> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn write_cdata<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &str,
) -> Result<(), ScrapeError> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::CData(BytesCData::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Render the full document to UTF-8 bytes.
pub fn render(records: &[BusinessRecord]) -> Result<Vec<u8>, ScrapeError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("businesses");
    let generated = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".into());
    root.push_attribute(("generated", generated.as_str()));
    writer.write_event(Event::Start(root))?;

    for r in records {
        writer.write_event(Event::Start(BytesStart::new("business")))?;
        write_text(&mut writer, "id", &r.id)?;
        write_cdata(&mut writer, "name", &r.name)?;
        write_text(&mut writer, "phone", &r.phone)?;
        write_text(&mut writer, "email", &r.email)?;
        write_text(&mut writer, "website", &r.website)?;
        write_cdata(&mut writer, "address", &r.address)?;
        write_text(&mut writer, "rating", &r.rating.to_string())?;
        write_text(&mut writer, "reviews", &r.reviews.to_string())?;
        writer.write_event(Event::End(BytesEnd::new("business")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("businesses")))?;
    Ok(writer.into_inner())
}

pub fn write_xml(records: &[BusinessRecord], path: &Path) -> Result<(), ScrapeError> {
    std::fs::write(path, render(records)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchQuery;
    use crate::synth;
    use quick_xml::Reader;

    fn sample_records(n: u64) -> Vec<BusinessRecord> {
        let query = SearchQuery::parse("restaurant", "Dhaka").unwrap();
        let seeds = synth::synthesize(&query);
        (0..n)
            .map(|cursor| synth::derive(seeds.get(cursor as usize), cursor))
            .collect()
    }

    #[test]
    fn document_parses_with_one_element_per_record() {
        let records = sample_records(5);
        let xml = String::from_utf8(render(&records).unwrap()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\""));

        let mut reader = Reader::from_str(&xml);
        let mut businesses = 0;
        loop {
            match reader.read_event().expect("well-formed document") {
                Event::Start(e) if e.name().as_ref() == b"business" => businesses += 1,
                Event::Eof => break,
                _ => {}
            }
        }
        assert_eq!(businesses, records.len());
    }

    #[test]
    fn child_elements_appear_in_declared_order() {
        let records = sample_records(1);
        let xml = String::from_utf8(render(&records).unwrap()).unwrap();

        let mut reader = Reader::from_str(&xml);
        let mut children = Vec::new();
        let mut in_business = false;
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) if e.name().as_ref() == b"business" => in_business = true,
                Event::End(e) if e.name().as_ref() == b"business" => break,
                Event::Start(e) if in_business => {
                    children.push(String::from_utf8(e.name().as_ref().to_vec()).unwrap());
                }
                Event::Eof => break,
                _ => {}
            }
        }
        assert_eq!(children, BusinessRecord::FIELDS);
    }

    #[test]
    fn free_text_fields_survive_markup_characters() {
        let mut records = sample_records(1);
        records[0].name = "Café <R&B> Grill".to_string();
        records[0].address = "1 & 2 <Main>, Dhaka".to_string();
        let xml = String::from_utf8(render(&records).unwrap()).unwrap();
        assert!(xml.contains("<![CDATA[Café <R&B> Grill]]>"));

        let mut reader = Reader::from_str(&xml);
        let mut name = None;
        let mut in_name = false;
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) if e.name().as_ref() == b"name" => in_name = true,
                Event::CData(e) if in_name => {
                    name = Some(String::from_utf8(e.into_inner().into_owned()).unwrap());
                    in_name = false;
                }
                Event::Eof => break,
                _ => {}
            }
        }
        assert_eq!(name.as_deref(), Some("Café <R&B> Grill"));
    }
}
