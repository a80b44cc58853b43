//! Event-driven parsing of the Hilltop measurement hierarchy
//!
//! Only the elements the pipeline consumes are mapped; anything else is
//! skipped so richer exports still decode. Missing attributes decode as
//! empty strings (or `None` for `NumItems`) and are left for the assembler
//! to judge.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::app::models::{Document, Measurement};
use crate::constants::elements;
use crate::error::DecodeError;

/// Parse UTF-8 Hilltop XML into a [`Document`]
pub fn parse_document(xml: &str) -> Result<Document, DecodeError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                expect_root(e)?;
                return parse_hilltop(&mut reader);
            }
            Event::Empty(ref e) => {
                expect_root(e)?;
                return Ok(Document::default());
            }
            Event::Eof => {
                return Err(DecodeError::Xml("document has no root element".into()));
            }
            _ => {}
        }
        buf.clear();
    }
}

fn expect_root(start: &BytesStart<'_>) -> Result<(), DecodeError> {
    if start.name().as_ref() == elements::ROOT {
        Ok(())
    } else {
        Err(DecodeError::UnexpectedRoot {
            found: element_name(start.name().as_ref()),
        })
    }
}

fn parse_hilltop(reader: &mut Reader<&[u8]>) -> Result<Document, DecodeError> {
    let mut document = Document::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.name().as_ref() {
                elements::AGENCY => {
                    document.agency = read_text(reader, elements::AGENCY)?;
                }
                elements::MEASUREMENT => {
                    let measurement = parse_measurement(reader, e)?;
                    document.measurements.push(measurement);
                }
                other => skip_element(reader, other)?,
            },
            Event::Empty(ref e) => {
                if e.name().as_ref() == elements::MEASUREMENT {
                    document.measurements.push(measurement_from_start(e)?);
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(unexpected_eof(elements::ROOT)),
            _ => {}
        }
        buf.clear();
    }

    Ok(document)
}

fn measurement_from_start(start: &BytesStart<'_>) -> Result<Measurement, DecodeError> {
    Ok(Measurement {
        site_name: attribute_value(start, elements::SITE_NAME_ATTR)?.unwrap_or_default(),
        ..Default::default()
    })
}

fn parse_measurement(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart<'_>,
) -> Result<Measurement, DecodeError> {
    let mut measurement = measurement_from_start(start)?;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.name().as_ref() {
                elements::DATA_SOURCE => {
                    apply_data_source_attributes(&mut measurement, e)?;
                    parse_data_source(reader, &mut measurement)?;
                }
                elements::DATA => {
                    apply_data_attributes(&mut measurement, e)?;
                    parse_data(reader, &mut measurement)?;
                }
                other => skip_element(reader, other)?,
            },
            Event::Empty(ref e) => match e.name().as_ref() {
                elements::DATA_SOURCE => apply_data_source_attributes(&mut measurement, e)?,
                elements::DATA => apply_data_attributes(&mut measurement, e)?,
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(unexpected_eof(elements::MEASUREMENT)),
            _ => {}
        }
        buf.clear();
    }

    Ok(measurement)
}

fn apply_data_source_attributes(
    measurement: &mut Measurement,
    start: &BytesStart<'_>,
) -> Result<(), DecodeError> {
    measurement.parameter_name = attribute_value(start, elements::NAME_ATTR)?.unwrap_or_default();
    measurement.num_items = attribute_value(start, elements::NUM_ITEMS_ATTR)?;
    Ok(())
}

fn apply_data_attributes(
    measurement: &mut Measurement,
    start: &BytesStart<'_>,
) -> Result<(), DecodeError> {
    measurement.date_format =
        attribute_value(start, elements::DATE_FORMAT_ATTR)?.unwrap_or_default();
    Ok(())
}

fn parse_data_source(
    reader: &mut Reader<&[u8]>,
    measurement: &mut Measurement,
) -> Result<(), DecodeError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.name().as_ref() {
                elements::INTERPOLATION => {
                    measurement.interpolation = read_text(reader, elements::INTERPOLATION)?;
                }
                other => skip_element(reader, other)?,
            },
            Event::End(_) => break,
            Event::Eof => return Err(unexpected_eof(elements::DATA_SOURCE)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_data(
    reader: &mut Reader<&[u8]>,
    measurement: &mut Measurement,
) -> Result<(), DecodeError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.name().as_ref() {
                elements::VALUE => {
                    let line = read_text(reader, elements::VALUE)?;
                    measurement.raw_value_lines.push(line);
                }
                other => skip_element(reader, other)?,
            },
            Event::Empty(ref e) => {
                if e.name().as_ref() == elements::VALUE {
                    measurement.raw_value_lines.push(String::new());
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(unexpected_eof(elements::DATA)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Collect the character data of the current element, untrimmed
///
/// Nested child elements are skipped; only the element's own text and
/// CDATA sections are kept.
fn read_text(reader: &mut Reader<&[u8]>, name: &[u8]) -> Result<String, DecodeError> {
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::CData(e) => {
                let raw = e.into_inner();
                let chunk = std::str::from_utf8(&raw)
                    .map_err(|err| DecodeError::Xml(format!("invalid CDATA: {err}")))?;
                text.push_str(chunk);
            }
            Event::Start(ref e) => skip_element(reader, e.name().as_ref())?,
            Event::End(_) => break,
            Event::Eof => return Err(unexpected_eof(name)),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

fn skip_element(reader: &mut Reader<&[u8]>, name: &[u8]) -> Result<(), DecodeError> {
    let mut depth = 1usize;
    let mut buf = Vec::new();

    while depth > 0 {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth -= 1,
            Event::Eof => return Err(unexpected_eof(name)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn attribute_value(start: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, DecodeError> {
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn unexpected_eof(name: &[u8]) -> DecodeError {
    DecodeError::UnexpectedEof {
        element: element_name(name),
    }
}

fn element_name(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}
