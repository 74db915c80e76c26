/// PDS3 label parsing for HiRISE DTM '.IMG' products
use std::collections::HashMap;

/// Parsed key/value view of the ASCII label that precedes the binary
/// sample records. Keys inside an OBJECT block are stored with the
/// object name as prefix, so LINES under OBJECT = IMAGE becomes
/// "IMAGE.LINES".
#[derive(Debug, Clone)]
pub struct PdsLabel {
    fields: HashMap<String, String>,
}

impl PdsLabel {
    /// Parse label statements from the start of an '.IMG' file.
    ///
    /// Reads line by line until the terminating END statement. The
    /// binary records that follow are never interpreted as text.
    pub fn parse(bytes: &[u8]) -> Result<Self, Box<dyn std::error::Error>> {
        let mut fields = HashMap::new();
        let mut object_stack: Vec<String> = Vec::new();
        let mut terminated = false;

        for raw_line in bytes.split(|&b| b == b'\n') {
            let line = String::from_utf8_lossy(raw_line);
            let line = line.trim_end_matches('\r').trim();
            if line.is_empty() || line.starts_with("/*") {
                continue;
            }
            if line == "END" {
                terminated = true;
                break;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim().to_string();
            let value = clean_value(value);

            match key.as_str() {
                "OBJECT" => object_stack.push(value),
                "END_OBJECT" => {
                    object_stack.pop();
                }
                _ => {
                    let scoped = match object_stack.last() {
                        Some(object) => format!("{object}.{key}"),
                        None => key,
                    };
                    fields.insert(scoped, value);
                }
            }
        }

        if !terminated {
            return Err("label has no END statement".into());
        }

        Ok(Self { fields })
    }

    /// Look up a label value by scoped key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    fn require(&self, key: &str) -> Result<&str, Box<dyn std::error::Error>> {
        self.get(key)
            .ok_or_else(|| format!("label is missing {key}").into())
    }

    /// Check the label describes a DTM layout this converter can decode.
    ///
    /// Collects every problem before failing so a malformed label is
    /// reported in one pass.
    pub fn verify(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut problems = Vec::new();

        if self.get("IMAGE.LINES").is_none() {
            problems.push("no LINES value under the IMAGE object".to_string());
        }
        if self.get("IMAGE.LINE_SAMPLES").is_none() {
            problems.push("no LINE_SAMPLES value under the IMAGE object".to_string());
        }
        if self.get("RECORD_BYTES").is_none() {
            problems.push("no RECORD_BYTES value in label".to_string());
        }

        match self.get("IMAGE.SAMPLE_BITS") {
            None => problems.push("no SAMPLE_BITS value under the IMAGE object".to_string()),
            Some(bits) if bits != "32" => {
                problems.push(format!("only 32-bit samples are supported, found {bits}"));
            }
            Some(_) => {}
        }

        if let (Ok(record_bytes), Ok(line_samples)) = (self.record_bytes(), self.line_samples()) {
            if record_bytes != 4 * line_samples {
                problems.push(format!(
                    "RECORD_BYTES should be 4 times LINE_SAMPLES, found {record_bytes} for {line_samples} samples"
                ));
            }
        }

        if self.get("IMAGE.SAMPLE_TYPE").is_none() {
            problems.push("no SAMPLE_TYPE value under the IMAGE object".to_string());
        }
        if self.get("IMAGE.SCALING_FACTOR").is_none() {
            problems.push("no SCALING_FACTOR value under the IMAGE object".to_string());
        }
        if self.get("IMAGE.OFFSET").is_none() {
            problems.push("no OFFSET value under the IMAGE object".to_string());
        }

        match self.get("RECORD_TYPE") {
            None => problems.push("no RECORD_TYPE value in label".to_string()),
            Some(kind) if kind != "FIXED_LENGTH" => {
                problems.push(format!("RECORD_TYPE should be FIXED_LENGTH, found {kind}"));
            }
            Some(_) => {}
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("\n").into())
        }
    }

    /// Byte count per fixed-length record
    pub fn record_bytes(&self) -> Result<usize, Box<dyn std::error::Error>> {
        Ok(self.require("RECORD_BYTES")?.parse()?)
    }

    /// Count of image lines
    pub fn lines(&self) -> Result<usize, Box<dyn std::error::Error>> {
        Ok(self.require("IMAGE.LINES")?.parse()?)
    }

    /// Samples per image line
    pub fn line_samples(&self) -> Result<usize, Box<dyn std::error::Error>> {
        Ok(self.require("IMAGE.LINE_SAMPLES")?.parse()?)
    }

    /// Binary sample encoding, PC_REAL for HiRISE DTMs
    pub fn sample_type(&self) -> Result<&str, Box<dyn std::error::Error>> {
        self.require("IMAGE.SAMPLE_TYPE")
    }

    /// Multiplier applied to decoded samples
    pub fn scaling_factor(&self) -> Result<f32, Box<dyn std::error::Error>> {
        parse_real(self.require("IMAGE.SCALING_FACTOR")?)
    }

    /// Additive offset applied to decoded samples
    pub fn offset(&self) -> Result<f32, Box<dyn std::error::Error>> {
        parse_real(self.require("IMAGE.OFFSET")?)
    }

    /// Smallest sample value that still counts as terrain
    pub fn valid_minimum(&self) -> Result<f32, Box<dyn std::error::Error>> {
        parse_real(self.require("IMAGE.VALID_MINIMUM")?)
    }

    /// Largest sample value that still counts as terrain
    pub fn valid_maximum(&self) -> Result<f32, Box<dyn std::error::Error>> {
        parse_real(self.require("IMAGE.VALID_MAXIMUM")?)
    }

    /// Little-endian byte pattern of the missing-data sentinel.
    ///
    /// Samples are compared against these raw bytes rather than as
    /// floats, matching how the sentinel is stored on disk.
    pub fn missing_constant_le_bytes(&self) -> Result<Option<[u8; 4]>, Box<dyn std::error::Error>> {
        match self.get("IMAGE.MISSING_CONSTANT") {
            None => Ok(None),
            Some(value) => {
                let bits = parse_real(value)?.to_bits();
                Ok(Some(bits.to_le_bytes()))
            }
        }
    }
}

/// Strip quoting and trailing unit expressions from a label value
fn clean_value(value: &str) -> String {
    let mut value = value.trim();
    if let Some(stripped) = value.strip_suffix('>') {
        if let Some(open) = stripped.rfind('<') {
            value = stripped[..open].trim_end();
        }
    }
    value.trim_matches('"').to_string()
}

/// Parse a PDS real, either decimal notation or the 16#XXXXXXXX# hex
/// form that spells out raw IEEE-754 bits
pub fn parse_real(text: &str) -> Result<f32, Box<dyn std::error::Error>> {
    if let Some(hex) = text.strip_prefix("16#").and_then(|t| t.strip_suffix('#')) {
        let bits = u32::from_str_radix(hex, 16)?;
        return Ok(f32::from_bits(bits));
    }
    Ok(text.trim().parse()?)
}
