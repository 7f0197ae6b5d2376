use kuchiki::{NodeData, NodeRef};

use crate::document::Document;
use crate::reader::errors::ReaderError;

/// Deep-copy `doc` so that the extractor can mutate the copy freely.
///
/// Fails with [`ReaderError::InvalidInput`] when `doc` is not a document node
/// with a root element.
pub fn isolate(doc: &Document) -> Result<Document, ReaderError> {
    if doc.root_element().is_none() {
        return Err(ReaderError::invalid_input(
            "a document with a root element is required",
        ));
    }

    let mut copy = Document::from_node(deep_copy(doc.node()));
    copy.set_url(doc.url().cloned());
    Ok(copy)
}

fn deep_copy(node: &NodeRef) -> NodeRef {
    let copy = shallow_copy(node);
    for child in node.children() {
        copy.append(deep_copy(&child));
    }
    copy
}

fn shallow_copy(node: &NodeRef) -> NodeRef {
    match node.data() {
        NodeData::Element(element) => {
            let attributes = element.attributes.borrow().map.clone();
            let copy = NodeRef::new_element(element.name.clone(), attributes);

            // <template> keeps its children in a separate fragment
            let target = copy
                .as_element()
                .and_then(|data| data.template_contents.as_ref());
            if let (Some(source), Some(target)) = (element.template_contents.as_ref(), target) {
                for child in source.children() {
                    target.append(deep_copy(&child));
                }
            }
            copy
        }
        NodeData::Text(text) => NodeRef::new_text(text.borrow().clone()),
        NodeData::Comment(comment) => NodeRef::new_comment(comment.borrow().clone()),
        NodeData::ProcessingInstruction(instruction) => {
            let (target, data) = &*instruction.borrow();
            NodeRef::new_processing_instruction(target.clone(), data.clone())
        }
        NodeData::Doctype(doctype) => NodeRef::new_doctype(
            doctype.name.clone(),
            doctype.public_id.clone(),
            doctype.system_id.clone(),
        ),
        NodeData::Document(_) => NodeRef::new_document(),
        NodeData::DocumentFragment => NodeRef::new(NodeData::DocumentFragment),
    }
}
