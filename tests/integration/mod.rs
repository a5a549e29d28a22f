mod store_workflow;
