use num_traits::ToPrimitive;

use crate::codec::sealed::{AbiType as _, Decoder as _};
use crate::codec::{Codec, Encoder, UIntCodec};
use crate::{Error, Value};

/// Bounds-checked read of one 32-byte word.
pub(crate) fn take_word(bytes: &[u8], offset: usize) -> Result<&[u8], Error> {
    let end = offset.checked_add(32).ok_or(Error::UnexpectedEnd(offset))?;
    bytes.get(offset..end).ok_or(Error::UnexpectedEnd(offset))
}

/// Bounds-checked read of a length-prefixed payload: length word at
/// `offset`, raw bytes immediately after.
pub(crate) fn take_payload(bytes: &[u8], offset: usize) -> Result<&[u8], Error> {
    let length = UIntCodec::new(256)
        .decode_frame(bytes, offset)?
        .as_uint()?
        .to_usize()
        .ok_or(Error::UnexpectedEnd(offset))?;

    let start = offset.checked_add(32).ok_or(Error::UnexpectedEnd(offset))?;
    let end = start.checked_add(length).ok_or(Error::UnexpectedEnd(start))?;
    bytes.get(start..end).ok_or(Error::UnexpectedEnd(start))
}

/// Head/tail encoding of an ordered element sequence. Static elements sit
/// inline in the head; each dynamic element contributes one offset word to
/// the head and its payload to the tail. Offsets are relative to the start
/// of this sequence's own encoding and are resolved only once every payload
/// size is known.
pub(crate) fn encode_frames(items: &[(&dyn Codec, &Value)]) -> Result<Vec<u8>, Error> {
    let mut head_chunks: Vec<Option<Vec<u8>>> = Vec::with_capacity(items.len());
    let mut tail_chunks: Vec<Vec<u8>> = Vec::new();

    for (codec, value) in items {
        if codec.is_dynamic() {
            head_chunks.push(None);
            tail_chunks.push(codec.encode(value)?);
        } else {
            head_chunks.push(Some(codec.encode(value)?));
        }
    }

    let head_size: usize = head_chunks
        .iter()
        .map(|chunk| chunk.as_ref().map(Vec::len).unwrap_or(32))
        .sum();

    let mut tail_offsets = Vec::with_capacity(tail_chunks.len());
    let mut tail_size = 0;
    for chunk in &tail_chunks {
        tail_offsets.push(head_size + tail_size);
        tail_size += chunk.len();
    }
    let mut tail_offsets = tail_offsets.into_iter();

    let uint_codec = UIntCodec::new(256);
    let mut buff = Vec::with_capacity(head_size + tail_size);
    for chunk in head_chunks {
        match chunk {
            Some(chunk) => buff.extend_from_slice(&chunk),
            None => {
                let offset = tail_offsets
                    .next()
                    .expect("one tail offset per dynamic element");
                buff.extend(uint_codec.encode(&Value::UInt(offset.into()))?);
            }
        }
    }
    for chunk in tail_chunks {
        buff.extend(chunk);
    }
    Ok(buff)
}

/// Inverse walk over a head/tail frame. The cursor advances by each codec's
/// head size; dynamic slots hold an offset into the tail, followed before
/// decoding recursively.
pub(crate) fn decode_frames(codecs: &[&dyn Codec], frame: &[u8]) -> Result<Vec<Value>, Error> {
    let uint_codec = UIntCodec::new(256);
    let mut values = Vec::with_capacity(codecs.len());
    let mut cursor = 0;

    for codec in codecs {
        let value = if codec.is_dynamic() {
            let frame_base = uint_codec
                .decode_frame(frame, cursor)?
                .as_uint()?
                .to_usize()
                .ok_or(Error::UnexpectedEnd(cursor))?;
            codec.decode_frame(frame, frame_base)?
        } else {
            codec.decode_frame(frame, cursor)?
        };
        cursor += codec.head_size();
        values.push(value);
    }
    Ok(values)
}
