//! Tests for the KMA response parser


/// Build a plausible response body around the given observation lines
pub fn response_with_lines(lines: &[&str]) -> String {
    let mut body = String::new();
    body.push_str("#--------------------------------------------------------------\n");
    body.push_str("# 지상관측자료 시간자료 [해설] TM: 관측시각, STN: 지점번호\n");
    body.push_str("#START7777\n");
    body.push_str("# YYMMDDHHMI STN WD ...\n");
    for line in lines {
        body.push_str(line);
        body.push('\n');
    }
    body.push_str("#7777END\n");
    body
}

/// A full-width observation line for the given timestamp with 46 fields
///
/// Positions 11 (temperature), 13 (humidity), 15 (precipitation),
/// 33 (sunshine) and 34 (irradiance) carry the supplied values; all other
/// positions carry filler.
pub fn observation_line(
    timestamp: &str,
    temp: &str,
    humidity: &str,
    precip: &str,
    sunshine: &str,
    irradiance: &str,
) -> String {
    let mut fields: Vec<String> = vec!["0.0".to_string(); 46];
    fields[0] = timestamp.to_string();
    fields[1] = "156".to_string();
    fields[11] = temp.to_string();
    fields[13] = humidity.to_string();
    fields[15] = precip.to_string();
    fields[33] = sunshine.to_string();
    fields[34] = irradiance.to_string();
    fields.join(" ")
}
