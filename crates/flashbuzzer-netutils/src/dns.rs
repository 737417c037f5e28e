//! Captive DNS responder
//!
//! Answers every standard query with a single A record pointing at the
//! access point. Queries for other record types get an empty answer so
//! clients fall back to IPv4.

use core::net::Ipv4Addr;

/// DNS server port
pub const SERVER_PORT: u16 = 53;

const HEADER_SIZE: usize = 12;
const TYPE_A: u16 = 1;
const TYPE_ANY: u16 = 255;
const CLASS_IN: u16 = 1;
/// Compression pointer to the question name at offset 12
const NAME_POINTER: [u8; 2] = [0xC0, 0x0C];
const ANSWER_SIZE: usize = 16;
const TTL_SECS: u32 = 60;

/// Flag bits of the second header word
const FLAG_QR: u16 = 0x8000;
const FLAG_OPCODE: u16 = 0x7800;
const FLAG_AA: u16 = 0x0400;
const FLAG_RD: u16 = 0x0100;
const FLAG_RA: u16 = 0x0080;

/// The first question of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsQuestion {
    pub id: u16,
    pub qtype: u16,
    pub qclass: u16,
    /// Bytes of header plus question section
    question_end: usize,
    recursion_desired: bool,
}

impl DnsQuestion {
    /// Check if the question is answered with an address record
    pub fn wants_address(&self) -> bool {
        (self.qtype == TYPE_A || self.qtype == TYPE_ANY) && self.qclass == CLASS_IN
    }
}

/// Parse the header and first question of a standard query.
///
/// Returns `None` for responses, non-standard opcodes, queries without a
/// question and malformed names.
pub fn parse_dns_query(packet: &[u8]) -> Option<DnsQuestion> {
    let header = packet.get(..HEADER_SIZE)?;
    let id = u16::from_be_bytes([header[0], header[1]]);
    let flags = u16::from_be_bytes([header[2], header[3]]);
    let qdcount = u16::from_be_bytes([header[4], header[5]]);
    if flags & (FLAG_QR | FLAG_OPCODE) != 0 || qdcount == 0 {
        return None;
    }

    // name is a sequence of labels ending with a zero length label
    let mut cursor = HEADER_SIZE;
    loop {
        let len = *packet.get(cursor)? as usize;
        cursor += 1;
        if len == 0 {
            break;
        }
        // compressed names are not expected in a question
        if len > 63 {
            return None;
        }
        cursor += len;
    }

    let fields = packet.get(cursor..cursor + 4)?;
    Some(DnsQuestion {
        id,
        qtype: u16::from_be_bytes([fields[0], fields[1]]),
        qclass: u16::from_be_bytes([fields[2], fields[3]]),
        question_end: cursor + 4,
        recursion_desired: flags & FLAG_RD != 0,
    })
}

/// Build the answer to `query` into `buffer`.
///
/// Returns the response length, or `None` if the query is not answerable or
/// `buffer` is too small.
pub fn build_dns_response(query: &[u8], address: Ipv4Addr, buffer: &mut [u8]) -> Option<usize> {
    let question = parse_dns_query(query)?;
    let answers: u16 = u16::from(question.wants_address());
    let size = question.question_end + usize::from(answers) * ANSWER_SIZE;
    let buffer = buffer.get_mut(..size)?;

    let mut flags = FLAG_QR | FLAG_AA | FLAG_RA;
    if question.recursion_desired {
        flags |= FLAG_RD;
    }

    buffer[0..2].copy_from_slice(&question.id.to_be_bytes());
    buffer[2..4].copy_from_slice(&flags.to_be_bytes());
    buffer[4..6].copy_from_slice(&1u16.to_be_bytes()); // qdcount
    buffer[6..8].copy_from_slice(&answers.to_be_bytes()); // ancount
    buffer[8..12].fill(0); // nscount, arcount
    buffer[HEADER_SIZE..question.question_end]
        .copy_from_slice(&query[HEADER_SIZE..question.question_end]);

    if answers > 0 {
        let answer = &mut buffer[question.question_end..];
        answer[0..2].copy_from_slice(&NAME_POINTER);
        answer[2..4].copy_from_slice(&TYPE_A.to_be_bytes());
        answer[4..6].copy_from_slice(&CLASS_IN.to_be_bytes());
        answer[6..10].copy_from_slice(&TTL_SECS.to_be_bytes());
        answer[10..12].copy_from_slice(&4u16.to_be_bytes());
        answer[12..16].copy_from_slice(&address.octets());
    }

    Some(size)
}
