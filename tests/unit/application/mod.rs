mod test_content_service;
mod test_learning_service;
