use yew::virtual_dom::AttrValue;

pub mod scroll;

pub fn attr_values(list: &[&'static str]) -> Vec<AttrValue> {
    list.iter().map(|item| AttrValue::Static(*item)).collect()
}
