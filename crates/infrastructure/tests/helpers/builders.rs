#![allow(dead_code)]

/// Hand-assembled query packets, built the way a stub resolver would.
pub struct QueryBytes {
    id: u16,
    flags: u16,
    labels: Vec<Vec<u8>>,
    qtype: u16,
    qclass: u16,
    edns_payload: Option<u16>,
}

impl QueryBytes {
    pub fn new(name: &str, qtype: u16) -> Self {
        let labels = name
            .split('.')
            .filter(|l| !l.is_empty())
            .map(|l| l.as_bytes().to_vec())
            .collect();
        Self::from_labels(labels, qtype)
    }

    /// Raw QNAME labels, for names no presentation string can express.
    pub fn from_labels(labels: Vec<Vec<u8>>, qtype: u16) -> Self {
        Self {
            id: 0x1234,
            flags: 0x0100,
            labels,
            qtype,
            qclass: 1,
            edns_payload: None,
        }
    }

    pub fn a(name: &str) -> Self {
        Self::new(name, 1)
    }

    pub fn aaaa(name: &str) -> Self {
        Self::new(name, 28)
    }

    pub fn ptr(name: &str) -> Self {
        Self::new(name, 12)
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn opcode(mut self, opcode: u8) -> Self {
        self.flags = (self.flags & !0x7800) | (u16::from(opcode & 0x0F) << 11);
        self
    }

    pub fn class(mut self, qclass: u16) -> Self {
        self.qclass = qclass;
        self
    }

    pub fn edns(mut self, payload: u16) -> Self {
        self.edns_payload = Some(payload);
        self
    }

    /// The QNAME in uncompressed wire form.
    pub fn wire_name(&self) -> Vec<u8> {
        let mut name = Vec::new();
        for label in &self.labels {
            name.push(label.len() as u8);
            name.extend_from_slice(label);
        }
        name.push(0x00);
        name
    }

    pub fn build(&self) -> Vec<u8> {
        let arcount: u16 = if self.edns_payload.is_some() { 1 } else { 0 };
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
        buf.extend_from_slice(&arcount.to_be_bytes());

        buf.extend_from_slice(&self.wire_name());
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());

        if let Some(payload) = self.edns_payload {
            append_opt_record(&mut buf, payload);
        }
        buf
    }
}

pub fn append_opt_record(buf: &mut Vec<u8>, payload: u16) {
    buf.push(0x00); // NAME = root
    buf.extend_from_slice(&[0x00, 41]); // TYPE = OPT
    buf.extend_from_slice(&payload.to_be_bytes()); // CLASS = UDP payload size
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // extended RCODE, version, flags
    buf.extend_from_slice(&[0x00, 0x00]); // RDLEN = 0
}
